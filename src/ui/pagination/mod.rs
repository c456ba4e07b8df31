mod intent;
mod reducer;
mod state;

pub use intent::PaginationIntent;
pub use reducer::PaginationReducer;
pub use state::{PaginationState, DEFAULT_ITEMS_PER_PAGE};
