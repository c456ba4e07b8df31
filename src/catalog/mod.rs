//! Catalog items and their retrieval from the remote API.

mod fetcher;
mod images;
mod types;

pub use fetcher::{CatalogError, CatalogFetcher};
pub use images::{ImagePatternError, ImagePolicy, RemotePattern};
pub use types::{Item, PricingOption, UnknownPricingOption};
