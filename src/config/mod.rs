//! Configuration module for the scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; the defaults point at the live Python docs.
//!
//! # Example
//!
//! ```no_run
//! use pydocs_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Results go to: {}", config.output.results_path().display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};
