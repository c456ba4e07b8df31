use std::sync::Arc;

use crate::catalog::Item;
use crate::filter::FilterState;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    /// Raw catalog, shared so snapshots stay cheap.
    pub items: Arc<[Item]>,
    pub filters: FilterState,
}

impl StoreState {
    pub fn new(items: Vec<Item>, filters: FilterState) -> Self {
        Self {
            items: Arc::from(items),
            filters,
        }
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(Vec::new(), FilterState::default())
    }
}

impl UiState for StoreState {}
