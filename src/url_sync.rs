//! Mirrors filter state into the page URL.
//!
//! The synchronizer owns the current page URL and nothing else. Updates
//! replace the current URL in place; no history entries are kept. It only
//! ever reads filter state, so writing the URL can never feed back into the
//! store.

use reqwest::Url;
use thiserror::Error;

use crate::filter::{query, FilterState};

#[derive(Debug, Error)]
pub enum UrlSyncError {
    #[error("Invalid page URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct UrlSynchronizer {
    url: Url,
}

impl UrlSynchronizer {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Build from the page URL, optionally overridden by user input.
    ///
    /// `input` may be an absolute http(s) URL, or a query string (with or
    /// without a leading `?`) applied to `page_url`. Values inside a query
    /// string may themselves contain URLs.
    pub fn from_input(page_url: &str, input: Option<&str>) -> Result<Self, UrlSyncError> {
        let mut url = parse_url(page_url)?;
        match input.map(str::trim) {
            None | Some("") => {}
            Some(raw) if is_absolute_http(raw) => url = parse_url(raw)?,
            Some(raw) => url.set_query(Some(raw.trim_start_matches('?'))),
        }
        Ok(Self::new(url))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Filter state encoded in the current URL. Used once, on load.
    pub fn initial_filters(&self) -> FilterState {
        query::decode(self.url.query_pairs())
    }

    /// Set each parameter with a non-empty value and delete each with an
    /// empty one. Parameters not named are preserved.
    pub fn replace_params<'a, I>(&mut self, params: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        for (key, value) in params {
            set_param(&mut pairs, key, value);
        }

        let before = self.url.to_string();
        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(&pairs);
        }

        let changed = before != self.url.as_str();
        if changed {
            tracing::debug!(url = %self.url, "Page URL replaced");
        }
        changed
    }

    /// Write the full encoding of `filters` into the URL.
    ///
    /// The same state always yields the same URL.
    pub fn sync(&mut self, filters: &FilterState) -> bool {
        let encoded = query::encode(filters);
        self.replace_params(encoded.iter().map(|(k, v)| (*k, v.as_str())))
    }
}

/// Replace the first occurrence of `key` in place and drop the rest, or
/// append it. An empty value deletes every occurrence.
fn set_param(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    if value.is_empty() {
        pairs.retain(|(k, _)| k != key);
        return;
    }
    match pairs.iter().position(|(k, _)| k == key) {
        Some(first) => {
            pairs[first].1 = value.to_string();
            let mut idx = 0;
            pairs.retain(|(k, _)| {
                let keep = k != key || idx == first;
                idx += 1;
                keep
            });
        }
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

fn is_absolute_http(raw: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        raw.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

fn parse_url(raw: &str) -> Result<Url, UrlSyncError> {
    Url::parse(raw).map_err(|e| UrlSyncError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}
