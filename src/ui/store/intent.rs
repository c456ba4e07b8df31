use crate::catalog::{Item, PricingOption};
use crate::filter::{PriceRange, PricingSelection, SortBy};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StoreIntent {
    /// Replace the whole catalog.
    SetItems(Vec<Item>),
    SetSearchText(String),
    SetSelectedPricingOptions(PricingSelection),
    /// Checkbox behaviour: add the option if absent, remove it otherwise.
    TogglePricingOption(PricingOption),
    SetPriceRange(PriceRange),
    SetSortBy(SortBy),
    ResetFilters,
}

impl StoreIntent {
    /// Whether the resulting state should be mirrored into the page URL.
    pub fn is_shareable(&self) -> bool {
        !matches!(self, Self::SetItems(_))
    }
}

impl Intent for StoreIntent {}
