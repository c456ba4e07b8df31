use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationIntent {
    /// The filtered view changed content: start over at page 1.
    Reset { total: usize, per_page: usize },
    /// Scroll position reached the end of the revealed window.
    NearBottom,
    /// The delayed load for `page` finished. Tagged with the generation
    /// it was requested in so completions from before a reset are ignored.
    PageLoaded { generation: u64, page: usize },
}

impl Intent for PaginationIntent {}
