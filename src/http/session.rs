//! Cached HTTP session
//!
//! Every GET first consults the SQLite cache; misses go to the network once,
//! with no retries, and successful responses are stored for later runs.

use crate::cache::{CacheResult, CachedResponse, SqliteCache};
use crate::config::{Config, SiteConfig};
use crate::http::fetcher::{FetchError, FetchedPage, Fetcher};
use crate::ScraperError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with the configured user agent and timeout
///
/// # Example
///
/// ```no_run
/// use pydocs_scraper::config::SiteConfig;
/// use pydocs_scraper::http::build_http_client;
///
/// let client = build_http_client(&SiteConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &SiteConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest client paired with the response cache
pub struct CachedSession {
    client: Client,
    cache: SqliteCache,
}

impl CachedSession {
    pub fn new(client: Client, cache: SqliteCache) -> Self {
        Self { client, cache }
    }

    /// Opens the cache file and builds the client described by `config`
    pub fn from_config(config: &Config) -> Result<Self, ScraperError> {
        let client = build_http_client(&config.site)?;
        let cache = SqliteCache::new(&config.output.cache_path())?;
        Ok(Self::new(client, cache))
    }

    /// Drops every cached response
    pub fn clear_cache(&mut self) -> CacheResult<usize> {
        self.cache.clear()
    }

    pub fn cache(&self) -> &SqliteCache {
        &self.cache
    }
}

impl Fetcher for CachedSession {
    async fn fetch(&mut self, url: &Url) -> Result<FetchedPage, FetchError> {
        if let Some(cached) = self.cache.get(url)? {
            return Ok(FetchedPage::from_cached(cached, url));
        }

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        let entry = CachedResponse::new(&final_url, status.as_u16(), content_type, body);
        self.cache.put(url, &entry)?;

        Ok(FetchedPage {
            url: final_url,
            status_code: entry.status_code,
            content_type: entry.content_type,
            body: entry.body,
            from_cache: false,
        })
    }
}
