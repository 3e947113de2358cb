//! HTTP fetching for the parsers
//!
//! This module contains:
//! - The `Fetcher` trait that parsers are written against
//! - `CachedSession`, the reqwest + SQLite cache implementation
//! - `get_response`, which turns network failures into a logged "no result"

mod fetcher;
mod session;

pub use fetcher::{get_response, FetchError, FetchedPage, Fetcher};
pub use session::{build_http_client, CachedSession};
