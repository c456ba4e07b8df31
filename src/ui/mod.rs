//! Terminal listing page.
//!
//! [`Session`](session::Session) holds the page state and can be driven
//! without a terminal; the remaining modules render it with ratatui and
//! translate crossterm input into store intents.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pagination;
pub mod render;
pub mod runtime;
pub mod session;
pub mod store;
pub mod theme;
pub mod terminal_guard;

pub use runtime::{run, RunOptions};
