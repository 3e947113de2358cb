//! pydocs-scraper: a scraper for the Python documentation site and PEP index
//!
//! This crate fetches a fixed set of documentation pages, extracts release
//! notes, version status, the PDF archive and PEP status counts, and renders
//! the results as tables or files. The PEP routine cross-checks each index
//! entry's short status code against the status on the PEP's own page.

pub mod cache;
pub mod config;
pub mod html;
pub mod http;
pub mod output;
pub mod parsers;
pub mod status;

use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cache error: {0}")]
    Cache(#[from] cache::CacheError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Tag not found: <{tag}> {filter}")]
    TagNotFound { tag: String, filter: String },

    #[error("Unexpected page structure: {0}")]
    Structure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use http::{CachedSession, Fetcher};
pub use output::ResultTable;
pub use parsers::{run_mode, Mode, ScrapeContext};
pub use status::{ExpectedStatusTable, RowOutcome, StatusReconciler};
