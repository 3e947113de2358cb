//! Cached session against a mock server

use crate::common::{config_for_server, pep_index, pep_page};
use pydocs_scraper::cache::SqliteCache;
use pydocs_scraper::http::{build_http_client, get_response, FetchError, Fetcher};
use pydocs_scraper::{run_mode, CachedSession, Mode, ScrapeContext, ScraperError};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn in_memory_session(config: &pydocs_scraper::Config) -> CachedSession {
    let client = build_http_client(&config.site).expect("Failed to build client");
    let cache = SqliteCache::new_in_memory().expect("Failed to open cache");
    CachedSession::new(client, cache)
}

#[tokio::test]
async fn test_second_fetch_comes_from_cache() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for_server(&mock_server.uri(), dir.path());

    Mock::given(method("GET"))
        .and(path("/3/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>docs</body></html>")
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = in_memory_session(&config);
    let url = Url::parse(&config.site.main_doc_url).unwrap();

    let first = session.fetch(&url).await.unwrap();
    let second = session.fetch(&url).await.unwrap();

    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.body, second.body);
    assert_eq!(first.content_type.as_deref(), Some("text/html"));
    assert_eq!(session.cache().len().unwrap(), 1);
}

#[tokio::test]
async fn test_error_status_is_not_cached() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for_server(&mock_server.uri(), dir.path());

    Mock::given(method("GET"))
        .and(path("/peps/pep-9999/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut session = in_memory_session(&config);
    let url = Url::parse(&format!("{}/peps/pep-9999/", mock_server.uri())).unwrap();

    let result = session.fetch(&url).await;
    assert!(matches!(result, Err(FetchError::Status { status: 404 })));

    assert!(get_response(&mut session, &url).await.unwrap().is_none());
    assert!(session.cache().is_empty().unwrap());
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for_server(&mock_server.uri(), dir.path());

    Mock::given(method("GET"))
        .and(path("/peps/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("index"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut session = in_memory_session(&config);
    let url = Url::parse(&config.site.pep_url).unwrap();

    session.fetch(&url).await.unwrap();
    assert_eq!(session.clear_cache().unwrap(), 1);
    let refetched = session.fetch(&url).await.unwrap();

    assert!(!refetched.from_cache);
}

#[tokio::test]
async fn test_file_cache_survives_sessions() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for_server(&mock_server.uri(), dir.path());

    Mock::given(method("GET"))
        .and(path("/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("docs"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = Url::parse(&config.site.main_doc_url).unwrap();
    {
        let mut session = CachedSession::from_config(&config).unwrap();
        session.fetch(&url).await.unwrap();
    }

    let mut session = CachedSession::from_config(&config).unwrap();
    assert!(session.fetch(&url).await.unwrap().from_cache);
    assert!(config.output.cache_path().exists());
}

#[tokio::test]
async fn test_pep_run_over_http() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for_server(&mock_server.uri(), dir.path());

    Mock::given(method("GET"))
        .and(path("/peps/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(pep_index(&[
            ("PA", "pep-0001/"),
            ("SF", "pep-0008/"),
            ("SA", "pep-0013/"),
            ("SF", "pep-0500/"),
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/peps/pep-0001/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(pep_page("Active")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/peps/pep-0008/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(pep_page("Final")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/peps/pep-0013/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(pep_page("Final")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/peps/pep-0500/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut ctx = ScrapeContext::new(&config, in_memory_session(&config));
    let table = run_mode(Mode::Pep, &mut ctx).await.unwrap().unwrap();

    let rows: Vec<(&str, &str)> = table
        .rows()
        .iter()
        .map(|row| (row[0].as_str(), row[1].as_str()))
        .collect();
    assert_eq!(rows, vec![("Active", "1"), ("Final", "2"), ("Total", "3")]);
}

#[tokio::test]
async fn test_unreadable_cache_fails_the_run() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for_server(&mock_server.uri(), dir.path());

    Mock::given(method("GET"))
        .and(path("/peps/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(pep_index(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let session = CachedSession::from_config(&config).unwrap();
    rusqlite::Connection::open(config.output.cache_path())
        .unwrap()
        .execute_batch("DROP TABLE responses;")
        .unwrap();

    let mut ctx = ScrapeContext::new(&config, session);
    let result = run_mode(Mode::Pep, &mut ctx).await;

    assert!(matches!(result, Err(ScraperError::Cache(_))));
}

#[tokio::test]
async fn test_failed_cache_write_fails_the_run() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for_server(&mock_server.uri(), dir.path());

    Mock::given(method("GET"))
        .and(path("/peps/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(pep_index(&[("PA", "pep-0001/")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/peps/pep-0001/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(pep_page("Active")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let session = CachedSession::from_config(&config).unwrap();
    rusqlite::Connection::open(config.output.cache_path())
        .unwrap()
        .execute_batch(
            "CREATE TRIGGER responses_read_only BEFORE INSERT ON responses
             BEGIN SELECT RAISE(ABORT, 'cache is read-only'); END;",
        )
        .unwrap();

    let mut ctx = ScrapeContext::new(&config, session);
    let result = run_mode(Mode::Pep, &mut ctx).await;

    assert!(matches!(result, Err(ScraperError::Cache(_))));
}
