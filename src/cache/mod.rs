//! Response cache
//!
//! Successful GET responses are stored in SQLite so repeated runs do not hit
//! the site again. The cache is shared by every fetch in a run and can be
//! cleared at start-up.

mod schema;
mod sqlite;

pub use sqlite::{cache_key, SqliteCache};

use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// A stored response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    /// Final URL of the response
    pub url: String,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// RFC 3339 timestamp of the original fetch
    pub fetched_at: String,
}
