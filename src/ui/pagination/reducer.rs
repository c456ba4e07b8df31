use crate::ui::mvi::Reducer;
use crate::ui::pagination::intent::PaginationIntent;
use crate::ui::pagination::state::PaginationState;

pub struct PaginationReducer;

impl Reducer for PaginationReducer {
    type State = PaginationState;
    type Intent = PaginationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaginationIntent::Reset { total, per_page } => {
                let per_page = per_page.max(1);
                PaginationState {
                    page: 1,
                    per_page,
                    revealed: total.min(per_page),
                    total,
                    has_more: total > per_page,
                    pending: None,
                    generation: state.generation.wrapping_add(1),
                }
            }
            PaginationIntent::NearBottom => {
                // At most one load in flight; ignored once exhausted.
                if !state.has_more || state.pending.is_some() {
                    return state;
                }
                PaginationState {
                    pending: Some(state.page + 1),
                    ..state
                }
            }
            PaginationIntent::PageLoaded { generation, page } => {
                if generation != state.generation || state.pending != Some(page) {
                    return state;
                }
                let slice = state.per_page.min(state.total.saturating_sub(state.revealed));
                let revealed = state.revealed + slice;
                PaginationState {
                    page,
                    revealed,
                    has_more: revealed < state.total,
                    pending: None,
                    ..state
                }
            }
        }
    }
}
