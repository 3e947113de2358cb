//! Fetch capability and the skip-on-failure wrapper

use crate::cache::{CacheError, CachedResponse};
use crate::ScraperError;
use thiserror::Error;
use url::Url;

/// Why a page could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

/// A fetched response body with its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: Url,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// Whether the response came from the cache
    pub from_cache: bool,
}

impl FetchedPage {
    /// Body decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Rebuilds a page from a cache entry. `requested` is used if the stored URL is unreadable.
    pub fn from_cached(cached: CachedResponse, requested: &Url) -> Self {
        let url = Url::parse(&cached.url).unwrap_or_else(|_| requested.clone());
        Self {
            url,
            status_code: cached.status_code,
            content_type: cached.content_type,
            body: cached.body,
            from_cache: true,
        }
    }
}

/// Something that can GET a page
///
/// Parsers only see this trait, so tests can serve pages from memory.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Performs a single GET. Non-2xx responses are errors.
    async fn fetch(&mut self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// Fetches `url`, logging and swallowing network failures
///
/// `Ok(None)` means the caller should skip this page and move on. A failing
/// response cache is not a network problem and is returned as an error.
pub async fn get_response<F: Fetcher>(
    fetcher: &mut F,
    url: &Url,
) -> Result<Option<FetchedPage>, ScraperError> {
    match fetcher.fetch(url).await {
        Ok(page) => {
            tracing::trace!(
                "Loaded {} ({} bytes{})",
                page.url,
                page.body.len(),
                if page.from_cache { ", cached" } else { "" }
            );
            Ok(Some(page))
        }
        Err(FetchError::Cache(e)) => {
            tracing::error!("Response cache failed for {}: {}", url, e);
            Err(ScraperError::Cache(e))
        }
        Err(e) => {
            tracing::error!("Failed to load page {}: {}", url, e);
            Ok(None)
        }
    }
}
