//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use storefront::catalog::{Item, PricingOption};
use storefront::ui::session::Session;
use storefront::url_sync::UrlSynchronizer;

pub const PAGE_URL: &str = "http://localhost:3000/store";
pub const IMAGE_HOST: &str = "https://closetfrontrecruiting.blob.core.windows.net";

pub fn item(id: &str, title: &str, creator: &str, option: PricingOption, price: f64) -> Item {
    Item {
        id: id.to_string(),
        creator: creator.to_string(),
        title: title.to_string(),
        pricing_option: option,
        image_path: format!("{}/{}.png", IMAGE_HOST, id),
        price,
    }
}

pub fn paid(id: &str, title: &str, price: f64) -> Item {
    item(id, title, "Studio", PricingOption::Paid, price)
}

pub fn free(id: &str, title: &str) -> Item {
    item(id, title, "Studio", PricingOption::Free, 0.0)
}

pub fn view_only(id: &str, title: &str) -> Item {
    item(id, title, "Studio", PricingOption::ViewOnly, 0.0)
}

/// `count` paid items titled "Item 00", "Item 01", ... priced 10, 20, ...
pub fn numbered(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| paid(&format!("n{i}"), &format!("Item {i:02}"), (i as f64 + 1.0) * 10.0))
        .collect()
}

/// A small mixed catalog used across suites.
pub fn sample_catalog() -> Vec<Item> {
    vec![
        item("1", "Zed Jacket", "Mona", PricingOption::Paid, 100.0),
        item("2", "Alpha Tee", "Kai", PricingOption::Free, 0.0),
        item("3", "beta Boots", "Lena", PricingOption::Paid, 45.0),
        item("4", "Gamma Cap", "Mona", PricingOption::ViewOnly, 0.0),
        item("5", "Delta Scarf", "Ravi", PricingOption::Paid, 999.0),
    ]
}

pub fn page(query: Option<&str>) -> UrlSynchronizer {
    UrlSynchronizer::from_input(PAGE_URL, query).expect("valid page url")
}

pub fn session(items: Vec<Item>, query: Option<&str>, per_page: usize) -> Session {
    Session::new(items, page(query), per_page)
}

pub fn titles(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.title.clone()).collect()
}
