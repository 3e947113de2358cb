use crate::status::ExpectedStatusTable;
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for the scraper
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(rename = "expected-status", default)]
    pub expected_status: ExpectedStatusTable,
}

/// Where the pages live and how to ask for them
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root of the documentation site, with a trailing slash
    #[serde(rename = "main-doc-url")]
    pub main_doc_url: String,

    /// PEP index page
    #[serde(rename = "pep-url")]
    pub pep_url: String,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            main_doc_url: "https://docs.python.org/3/".to_string(),
            pep_url: "https://peps.python.org/".to_string(),
            user_agent: format!("pydocs-scraper/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
        }
    }
}

/// Output locations. Relative paths resolve against `base_dir`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(rename = "base-dir")]
    pub base_dir: PathBuf,

    /// SQLite file holding cached responses
    #[serde(rename = "cache-file")]
    pub cache_file: PathBuf,

    /// Directory for CSV results
    #[serde(rename = "results-dir")]
    pub results_dir: PathBuf,

    /// Directory for the downloaded archive
    #[serde(rename = "downloads-dir")]
    pub downloads_dir: PathBuf,

    #[serde(rename = "logs-dir")]
    pub logs_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            cache_file: PathBuf::from("parser_cache.sqlite"),
            results_dir: PathBuf::from("results"),
            downloads_dir: PathBuf::from("downloads"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}

impl OutputConfig {
    fn resolve(&self, path: &PathBuf) -> PathBuf {
        if path.is_absolute() {
            path.clone()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn cache_path(&self) -> PathBuf {
        self.resolve(&self.cache_file)
    }

    pub fn results_path(&self) -> PathBuf {
        self.resolve(&self.results_dir)
    }

    pub fn downloads_path(&self) -> PathBuf {
        self.resolve(&self.downloads_dir)
    }

    pub fn logs_path(&self) -> PathBuf {
        self.resolve(&self.logs_dir)
    }
}
