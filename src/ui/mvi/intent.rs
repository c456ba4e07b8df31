/// Marker trait for intents.
///
/// An intent is either a user action (typing in the search box, toggling a
/// pricing checkbox) or a system event (catalog fetched, delayed page ready).
pub trait Intent: Send + 'static {}
