//! whats-new, latest-versions and download over an in-memory site

use crate::common::{config_in, StaticSite};
use pydocs_scraper::output::{control_output, OutputMode};
use pydocs_scraper::{run_mode, Mode, ScrapeContext};
use std::fs;

const WHATS_NEW_INDEX: &str = r#"
    <html><body>
    <section id="what-s-new-in-python">
      <div class="toctree-wrapper compound"><ul>
        <li class="toctree-l1"><a href="3.13.html">What's New In Python 3.13</a></li>
        <li class="toctree-l1"><a href="3.12.html">What's New In Python 3.12</a></li>
        <li class="toctree-l1"><a href="3.11.html">What's New In Python 3.11</a></li>
      </ul></div>
    </section>
    </body></html>
"#;

fn article(version: &str, editor: &str) -> String {
    format!(
        "<html><body><h1>What's New In Python {}</h1>\n<dl>\n<dt>Editor</dt>\n<dd>{}</dd>\n</dl></body></html>",
        version, editor
    )
}

#[tokio::test]
async fn test_whats_new_skips_unavailable_articles() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let site = StaticSite::new()
        .with_page("https://docs.python.org/3/whatsnew/", WHATS_NEW_INDEX)
        .with_page(
            "https://docs.python.org/3/whatsnew/3.13.html",
            article("3.13", "Thomas Wouters"),
        )
        .with_page(
            "https://docs.python.org/3/whatsnew/3.11.html",
            article("3.11", "Pablo Galindo Salgado"),
        );
    let mut ctx = ScrapeContext::new(&config, site);

    let table = run_mode(Mode::WhatsNew, &mut ctx).await.unwrap().unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0][0], "https://docs.python.org/3/whatsnew/3.13.html");
    assert_eq!(table.rows()[0][1], "What's New In Python 3.13");
    assert_eq!(table.rows()[0][2], " Editor Thomas Wouters ");
    assert_eq!(table.rows()[1][1], "What's New In Python 3.11");
}

#[tokio::test]
async fn test_latest_versions() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let page = r#"
        <html><body><div class="sphinxsidebarwrapper">
          <ul>
            <li><a href="https://docs.python.org/3.13/">Python 3.13 (stable)</a></li>
            <li><a href="https://docs.python.org/2.7/">Python 2.7 (EOL)</a></li>
            <li><a href="https://www.python.org/doc/versions/">All versions</a></li>
          </ul>
        </div></body></html>
    "#;
    let site = StaticSite::new().with_page("https://docs.python.org/3/", page);
    let mut ctx = ScrapeContext::new(&config, site);

    let table = run_mode(Mode::LatestVersions, &mut ctx)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[1][1], "2.7");
    assert_eq!(table.rows()[1][2], "EOL");
    assert_eq!(table.rows()[2][1], "All versions");
}

#[tokio::test]
async fn test_latest_versions_without_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let page = r#"<div class="sphinxsidebarwrapper"><ul><li>Nothing</li></ul></div>"#;
    let site = StaticSite::new().with_page("https://docs.python.org/3/", page);
    let mut ctx = ScrapeContext::new(&config, site);

    assert!(run_mode(Mode::LatestVersions, &mut ctx).await.is_err());
}

#[tokio::test]
async fn test_download_writes_archive() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let page = r#"
        <html><body><div role="main">
          <table class="docutils">
            <tr><td>PDF (A4 paper size)</td>
                <td><a href="archives/python-3.13-docs-pdf-a4.zip">Download</a></td></tr>
          </table>
        </div></body></html>
    "#;
    let archive: &[u8] = b"PK\x03\x04 fake zip";
    let site = StaticSite::new()
        .with_page("https://docs.python.org/3/download.html", page)
        .with_page(
            "https://docs.python.org/3/archives/python-3.13-docs-pdf-a4.zip",
            archive,
        );
    let mut ctx = ScrapeContext::new(&config, site);

    let result = run_mode(Mode::Download, &mut ctx).await.unwrap();

    assert!(result.is_none());
    let saved = config
        .output
        .downloads_path()
        .join("python-3.13-docs-pdf-a4.zip");
    assert_eq!(fs::read(saved).unwrap(), archive);
}

#[tokio::test]
async fn test_results_saved_as_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let page = r#"
        <div class="sphinxsidebarwrapper"><ul>
          <li><a href="https://docs.python.org/3.12/">Python 3.12 (security-fixes)</a></li>
          <li><a href="https://www.python.org/doc/versions/">All versions</a></li>
        </ul></div>
    "#;
    let site = StaticSite::new().with_page("https://docs.python.org/3/", page);
    let mut ctx = ScrapeContext::new(&config, site);
    let table = run_mode(Mode::LatestVersions, &mut ctx)
        .await
        .unwrap()
        .unwrap();

    control_output(
        &table,
        Some(OutputMode::File),
        Mode::LatestVersions.name(),
        &config.output,
    )
    .unwrap();

    let files: Vec<_> = fs::read_dir(config.output.results_path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("latest-versions_"));
    assert_eq!(
        fs::read_to_string(&files[0]).unwrap(),
        "Documentation link,Version,Status\n\
         https://docs.python.org/3.12/,3.12,security-fixes\n\
         https://www.python.org/doc/versions/,All versions,\n"
    );
}
