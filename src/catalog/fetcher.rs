//! One-shot retrieval of the item catalog.
//!
//! The catalog is fetched once per session. Any failure is logged and
//! degrades to an empty list so the page still renders.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

use crate::catalog::types::Item;
use crate::config::CatalogConfig;

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Catalog request timed out after {duration}s")]
    Timeout { duration: u64 },

    #[error("Failed to decode catalog response: {0}")]
    Decode(#[source] reqwest::Error),
}

pub struct CatalogFetcher {
    client: Client,
    endpoint: Url,
    request_timeout: Duration,
}

impl CatalogFetcher {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| CatalogError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(CatalogError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint,
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the catalog, propagating any failure.
    pub async fn fetch(&self) -> Result<Vec<Item>, CatalogError> {
        match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(CatalogError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    /// Fetch the catalog; failures are logged and yield an empty list.
    pub async fn fetch_or_empty(&self) -> Vec<Item> {
        match self.fetch().await {
            Ok(items) => {
                tracing::info!(count = items.len(), endpoint = %self.endpoint, "Catalog loaded");
                items
            }
            Err(err) => {
                tracing::warn!(endpoint = %self.endpoint, "Error fetching catalog: {}", err);
                Vec::new()
            }
        }
    }

    async fn do_fetch(&self) -> Result<Vec<Item>, CatalogError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Request {
                endpoint: self.endpoint.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let raw: Vec<serde_json::Value> = response.json().await.map_err(CatalogError::Decode)?;
        Ok(decode_items(raw))
    }
}

/// Decode entries one by one so a single malformed record does not
/// discard the whole catalog. Duplicate ids keep their first occurrence.
fn decode_items(raw: Vec<serde_json::Value>) -> Vec<Item> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(raw.len());
    let mut skipped = 0usize;

    for value in raw {
        match serde_json::from_value::<Item>(value) {
            Ok(item) if seen.insert(item.id.clone()) => items.push(item),
            Ok(item) => {
                tracing::debug!(id = %item.id, "Dropping duplicate catalog item");
                skipped += 1;
            }
            Err(err) => {
                tracing::debug!("Skipping malformed catalog item: {}", err);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "Some catalog entries were ignored");
    }
    items
}
