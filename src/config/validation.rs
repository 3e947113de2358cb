use crate::config::types::{Config, OutputConfig, SiteConfig};
use crate::status::ExpectedStatusTable;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_output_config(&config.output)?;
    validate_expected_status(&config.expected_status)?;
    Ok(())
}

/// Validates site URLs and request settings
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_http_url("main-doc-url", &config.main_doc_url)?;
    validate_http_url("pep-url", &config.pep_url)?;

    // Relative joins like "whatsnew/" would drop the last segment otherwise
    for (name, value) in [
        ("main-doc-url", &config.main_doc_url),
        ("pep-url", &config.pep_url),
    ] {
        if !value.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "{} must end with '/', got '{}'",
                name, value
            )));
        }
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

fn validate_http_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            name, value
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    for (name, path) in [
        ("cache-file", &config.cache_file),
        ("results-dir", &config.results_dir),
        ("downloads-dir", &config.downloads_dir),
        ("logs-dir", &config.logs_dir),
    ] {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    Ok(())
}

/// Validates the preview-code table
fn validate_expected_status(table: &ExpectedStatusTable) -> Result<(), ConfigError> {
    if table.is_empty() {
        return Err(ConfigError::Validation(
            "expected-status must contain at least one code".to_string(),
        ));
    }

    for (code, statuses) in table.iter() {
        if code.chars().count() > 1 {
            return Err(ConfigError::Validation(format!(
                "expected-status code '{}' must be at most one character",
                code
            )));
        }

        if statuses.is_empty() {
            return Err(ConfigError::Validation(format!(
                "expected-status code '{}' must list at least one status",
                code
            )));
        }
    }

    Ok(())
}
