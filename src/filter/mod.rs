//! Filter criteria, the pure view computation over the catalog, and the
//! query-string encoding of the criteria.

pub mod query;
mod state;
mod view;

pub use query::QueryError;
pub use state::{FilterState, PriceRange, PricingSelection, SortBy, PRICE_MAX, PRICE_MIN};
pub use view::{compute, FilteredView};
