//! Encoding of [`FilterState`] as URL query parameters, and back.
//!
//! | parameter        | value                         | default   |
//! |------------------|-------------------------------|-----------|
//! | `keyword`        | search text                   | empty     |
//! | `pricingOptions` | `+`-joined option codes       | empty     |
//! | `sort`           | `name`/`price_high`/`price_low` | `name`  |
//! | `priceRange`     | `min+max`                     | `0+999`   |
//!
//! Parameters holding their default value are omitted when encoding.
//! Decoding never fails: malformed values fall back to defaults.

use thiserror::Error;

use crate::catalog::PricingOption;
use crate::filter::state::{FilterState, PriceRange, PricingSelection, SortBy};

pub const KEYWORD: &str = "keyword";
pub const PRICING_OPTIONS: &str = "pricingOptions";
pub const SORT: &str = "sort";
pub const PRICE_RANGE: &str = "priceRange";

/// Every parameter owned by the filter state.
pub const PARAMS: [&str; 4] = [KEYWORD, PRICING_OPTIONS, SORT, PRICE_RANGE];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid price range '{raw}': expected 'min+max'")]
    MalformedPriceRange { raw: String },
    #[error("invalid price bound '{raw}'")]
    InvalidPriceBound { raw: String },
}

/// Build the initial filter state from query pairs. Later duplicates win.
pub fn decode<I, K, V>(pairs: I) -> FilterState
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut filters = FilterState::default();
    for (key, value) in pairs {
        let value = value.as_ref();
        match key.as_ref() {
            KEYWORD => filters.search_text = value.to_string(),
            PRICING_OPTIONS => filters.pricing = parse_pricing_options(value),
            SORT => filters.sort_by = parse_sort(value),
            PRICE_RANGE => {
                filters.price_range = match parse_price_range(value) {
                    Ok(range) => range,
                    Err(err) => {
                        tracing::warn!("Ignoring {} parameter: {}", PRICE_RANGE, err);
                        PriceRange::full()
                    }
                }
            }
            _ => {}
        }
    }
    filters
}

/// Full parameter map for a filter state. Defaults map to an empty value,
/// which tells the URL synchronizer to delete the parameter.
pub fn encode(filters: &FilterState) -> [(&'static str, String); 4] {
    let sort = if filters.sort_by == SortBy::default() {
        String::new()
    } else {
        filters.sort_by.as_str().to_string()
    };
    let price_range = if filters.price_range.is_full() {
        String::new()
    } else {
        encode_price_range(filters.price_range)
    };

    [
        (KEYWORD, filters.search_text.clone()),
        (PRICING_OPTIONS, encode_pricing_options(&filters.pricing)),
        (SORT, sort),
        (PRICE_RANGE, price_range),
    ]
}

pub fn encode_pricing_options(selection: &PricingSelection) -> String {
    selection
        .iter()
        .map(|option| option.code().to_string())
        .collect::<Vec<_>>()
        .join("+")
}

pub fn encode_price_range(range: PriceRange) -> String {
    format!("{}+{}", range.min(), range.max())
}

/// Parse `+`-joined option codes, dropping unknown or duplicate tokens.
///
/// A space is accepted as separator too, since `+` decodes to a space in
/// form-encoded query strings.
pub fn parse_pricing_options(raw: &str) -> PricingSelection {
    split_plus(raw)
        .filter_map(|token| token.parse::<u8>().ok())
        .filter_map(|code| PricingOption::try_from(code).ok())
        .collect()
}

pub fn parse_sort(raw: &str) -> SortBy {
    SortBy::parse(raw).unwrap_or_default()
}

/// Parse `min+max`. Bounds outside `[0, 999]` are clamped.
pub fn parse_price_range(raw: &str) -> Result<PriceRange, QueryError> {
    let mut tokens = split_plus(raw);
    let (Some(min), Some(max), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(QueryError::MalformedPriceRange {
            raw: raw.to_string(),
        });
    };
    Ok(PriceRange::new(parse_bound(min)?, parse_bound(max)?))
}

fn parse_bound(raw: &str) -> Result<u32, QueryError> {
    let value: f64 = raw.parse().map_err(|_| QueryError::InvalidPriceBound {
        raw: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(QueryError::InvalidPriceBound {
            raw: raw.to_string(),
        });
    }
    // Truncate like an integer parse; negatives clamp to zero.
    Ok(value.trunc().max(0.0).min(u32::MAX as f64) as u32)
}

fn split_plus(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(['+', ' ']).map(str::trim).filter(|t| !t.is_empty())
}
