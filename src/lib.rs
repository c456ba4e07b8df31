//! Storefront listing page: fetch a remote item catalog, filter it by
//! search text, pricing option and price range, sort it, and reveal it
//! page by page, with the filters mirrored into a shareable URL.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod ui;
pub mod url_sync;
