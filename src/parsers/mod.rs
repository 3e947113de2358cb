//! Page parsers, one per CLI mode
//!
//! Each parser fetches its pages through the context's [`Fetcher`], walks
//! the fixed page template and returns a [`ResultTable`] (or `None` when
//! there is nothing to render). DOM walks are plain functions over HTML text
//! so they can be tested without a network.

mod download;
mod latest_versions;
mod pep;
mod whats_new;

pub use download::{archive_file_name, download, find_archive_link};
pub use latest_versions::{latest_versions, parse_versions, VERSION_PATTERN};
pub use pep::{parse_detail_status, parse_index_rows, pep, IndexRow};
pub use whats_new::{parse_article, parse_whats_new_index, whats_new};

use crate::config::Config;
use crate::http::Fetcher;
use crate::output::ResultTable;
use crate::ScraperError;
use clap::ValueEnum;
use std::fmt;

/// Which parser to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    /// Articles from the "What's New" section
    WhatsNew,
    /// Python versions and their status
    LatestVersions,
    /// Download the PDF (A4) documentation archive
    Download,
    /// PEP status counts, checked against each PEP page
    Pep,
}

impl Mode {
    /// The name used on the command line and in result file names
    pub fn name(&self) -> &'static str {
        match self {
            Self::WhatsNew => "whats-new",
            Self::LatestVersions => "latest-versions",
            Self::Download => "download",
            Self::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a parser needs: configuration and a way to fetch pages
pub struct ScrapeContext<'c, F> {
    pub config: &'c Config,
    pub fetcher: F,
}

impl<'c, F: Fetcher> ScrapeContext<'c, F> {
    pub fn new(config: &'c Config, fetcher: F) -> Self {
        Self { config, fetcher }
    }
}

/// Runs the parser for `mode`
pub async fn run_mode<F: Fetcher>(
    mode: Mode,
    ctx: &mut ScrapeContext<'_, F>,
) -> Result<Option<ResultTable>, ScraperError> {
    tracing::debug!("Running parser '{}'", mode);
    match mode {
        Mode::WhatsNew => whats_new(ctx).await,
        Mode::LatestVersions => latest_versions(ctx).await,
        Mode::Download => download(ctx).await,
        Mode::Pep => pep(ctx).await,
    }
}
