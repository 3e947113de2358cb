//! PDF documentation archive download

use crate::html::{find_tag, required_attr, resolve_link, TagQuery};
use crate::http::{get_response, Fetcher};
use crate::output::ResultTable;
use crate::parsers::ScrapeContext;
use crate::ScraperError;
use regex::Regex;
use scraper::Html;
use std::fs;
use url::Url;

const ARCHIVE_PATTERN: &str = r".+pdf-a4\.zip$";

/// Finds the A4 PDF archive link in the download table
pub fn find_archive_link(html: &str, base_url: &Url) -> Result<Url, ScraperError> {
    let document = Html::parse_document(html);
    let main = find_tag(
        document.root_element(),
        &TagQuery::tag("div").with_attr("role", "main"),
    )?;
    let table = find_tag(
        main,
        &TagQuery::tag("table").with_attr("class", "docutils"),
    )?;
    let anchor = find_tag(
        table,
        &TagQuery::tag("a").with_pattern("href", Regex::new(ARCHIVE_PATTERN)?),
    )?;

    resolve_link(base_url, required_attr(anchor, "href")?)
}

/// Last path segment of the archive URL
pub fn archive_file_name(url: &Url) -> Option<&str> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
}

/// Downloads the archive into the downloads directory
///
/// Produces no table; the saved path is logged.
pub async fn download<F: Fetcher>(
    ctx: &mut ScrapeContext<'_, F>,
) -> Result<Option<ResultTable>, ScraperError> {
    let config = ctx.config;
    let downloads_url = Url::parse(&config.site.main_doc_url)?.join("download.html")?;
    let Some(response) = get_response(&mut ctx.fetcher, &downloads_url).await? else {
        return Ok(None);
    };

    let archive_url = find_archive_link(&response.text(), &downloads_url)?;
    let file_name = archive_file_name(&archive_url)
        .ok_or_else(|| {
            ScraperError::Structure(format!("archive link has no file name: {}", archive_url))
        })?
        .to_string();

    let downloads_dir = config.output.downloads_path();
    fs::create_dir_all(&downloads_dir)?;
    let archive_path = downloads_dir.join(file_name);

    let Some(archive) = get_response(&mut ctx.fetcher, &archive_url).await? else {
        return Ok(None);
    };
    fs::write(&archive_path, &archive.body)?;
    tracing::info!("Archive downloaded and saved: {}", archive_path.display());

    Ok(None)
}
