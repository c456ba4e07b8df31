//! Model-View-Intent (MVI) primitives.
//!
//! Every state transition of the listing page goes through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of everything the view renders
//! - **Intent**: user actions or system events (catalog loaded, page ready)
//! - **Reducer**: pure function producing the next state
//! - **Store**: owns one state instance and notifies subscribers on change

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
