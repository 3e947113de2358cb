//! SQLite response cache
//!
//! Entries are keyed by a SHA-256 of the request method and URL and never
//! expire; the only way to drop them is [`SqliteCache::clear`].

use crate::cache::schema::initialize_schema;
use crate::cache::{CacheResult, CachedResponse};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::path::Path;
use url::Url;

/// Cache key for a GET of `url`
pub fn cache_key(url: &Url) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"GET ");
    hasher.update(url.as_str().as_bytes());
    hex::encode(hasher.finalize())
}

/// SQLite-backed response cache
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    /// Opens or creates the cache database at `path`
    ///
    /// Missing parent directories are created.
    pub fn new(path: &Path) -> CacheResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;
        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates a cache that lives only as long as the value
    pub fn new_in_memory() -> CacheResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Looks up a previously stored response
    pub fn get(&self, url: &Url) -> CacheResult<Option<CachedResponse>> {
        let mut stmt = self.conn.prepare(
            "SELECT url, status_code, content_type, body, fetched_at
             FROM responses WHERE cache_key = ?1",
        )?;

        let response = stmt
            .query_row(params![cache_key(url)], |row| {
                Ok(CachedResponse {
                    url: row.get(0)?,
                    status_code: row.get(1)?,
                    content_type: row.get(2)?,
                    body: row.get(3)?,
                    fetched_at: row.get(4)?,
                })
            })
            .optional()?;

        Ok(response)
    }

    /// Stores a response for `request_url`, replacing any earlier entry
    ///
    /// `response.url` may differ from `request_url` after redirects; the key
    /// is always the requested URL.
    pub fn put(&mut self, request_url: &Url, response: &CachedResponse) -> CacheResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO responses
             (cache_key, url, status_code, content_type, body, fetched_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                cache_key(request_url),
                response.url,
                response.status_code,
                response.content_type,
                response.body,
                response.fetched_at,
            ],
        )?;
        Ok(())
    }

    /// Removes every entry and returns how many there were
    pub fn clear(&mut self) -> CacheResult<usize> {
        let removed = self.conn.execute("DELETE FROM responses", [])?;
        Ok(removed)
    }

    /// Number of cached responses
    pub fn len(&self) -> CacheResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM responses", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    pub fn is_empty(&self) -> CacheResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl CachedResponse {
    /// Builds an entry stamped with the current time
    pub fn new(url: &Url, status_code: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            url: url.to_string(),
            status_code,
            content_type,
            body,
            fetched_at: Utc::now().to_rfc3339(),
        }
    }
}
