use crate::ui::mvi::UiState;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Cursor over the filtered view: how much of it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Last page appended, starting at 1.
    pub page: usize,
    pub per_page: usize,
    /// Length of the visible prefix of the view.
    pub revealed: usize,
    /// Length of the whole view.
    pub total: usize,
    pub has_more: bool,
    /// Page whose delayed load is in flight.
    pub pending: Option<usize>,
    /// Bumped on every reset.
    pub generation: u64,
}

impl PaginationState {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Message shown once nothing is left to reveal.
    pub fn end_message(&self) -> Option<&'static str> {
        if self.has_more {
            None
        } else if self.revealed == 0 {
            Some("No items found")
        } else {
            Some("No more items to load")
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_ITEMS_PER_PAGE,
            revealed: 0,
            total: 0,
            has_more: false,
            pending: None,
            generation: 0,
        }
    }
}

impl UiState for PaginationState {}
