use std::sync::Arc;

use crate::filter::{FilterState, PriceRange, PricingSelection};
use crate::ui::mvi::Reducer;
use crate::ui::store::intent::StoreIntent;
use crate::ui::store::state::StoreState;

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = StoreState;
    type Intent = StoreIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::SetItems(items) => {
                state.items = Arc::from(items);
            }
            StoreIntent::SetSearchText(text) => {
                state.filters.search_text = text;
            }
            StoreIntent::SetSelectedPricingOptions(selection) => {
                set_pricing(&mut state.filters, selection);
            }
            StoreIntent::TogglePricingOption(option) => {
                let mut selection = state.filters.pricing.clone();
                selection.toggle(option);
                set_pricing(&mut state.filters, selection);
            }
            StoreIntent::SetPriceRange(range) => {
                state.filters.price_range = range;
            }
            StoreIntent::SetSortBy(sort_by) => {
                state.filters.sort_by = sort_by;
            }
            StoreIntent::ResetFilters => {
                state.filters = FilterState::default();
            }
        }
        state
    }
}

/// Dropping `Paid` from the selection also drops any price constraint.
fn set_pricing(filters: &mut FilterState, selection: PricingSelection) {
    if filters.pricing.includes_paid() && !selection.includes_paid() {
        filters.price_range = PriceRange::full();
    }
    filters.pricing = selection;
}
