use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::RemotePattern;
use crate::config::types::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `<config dir>/storefront/config.toml`, or `./storefront/config.toml`
    /// when the platform has no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("storefront").join("config.toml")
    }

    /// Read the default config file. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Read and validate an explicit config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Both URLs must be http(s), the catalog timeout and page size must be
    /// non-zero, and every image pattern must parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("catalog.endpoint", &self.catalog.endpoint)?;
        validate_http_url("page.url", &self.page.url)?;

        if self.catalog.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "catalog.timeout_seconds must be greater than zero".to_string(),
            });
        }
        if self.pagination.items_per_page == 0 {
            return Err(ConfigError::ValidationError {
                message: "pagination.items_per_page must be greater than zero".to_string(),
            });
        }

        for pattern in &self.images.remote_patterns {
            RemotePattern::parse(pattern).map_err(|e| ConfigError::ValidationError {
                message: format!("images.remote_patterns: {}", e),
            })?;
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::ValidationError {
        message: format!("{} '{}' is not a valid URL: {}", field, value, e),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            message: format!("{} '{}' must use http or https", field, value),
        });
    }
    Ok(())
}
