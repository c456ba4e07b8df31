use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote catalog endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL returning the JSON item array.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Address of the listing page whose query string mirrors the filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_url")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Items revealed per page (default: 12).
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Simulated latency before a page is appended, in milliseconds (default: 500).
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

/// Remote hosts images may be loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_remote_patterns")]
    pub remote_patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file for the interactive UI. Defaults to the platform data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_endpoint() -> String {
    "https://closet-recruiting-api.azurewebsites.net/api/data".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_url() -> String {
    "http://localhost:3000/store".to_string()
}

fn default_items_per_page() -> usize {
    12
}

fn default_load_delay_ms() -> u64 {
    500
}

fn default_remote_patterns() -> Vec<String> {
    vec!["https://closetfrontrecruiting.blob.core.windows.net/**".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: default_page_url(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            remote_patterns: default_remote_patterns(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}
