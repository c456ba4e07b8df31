/// Marker trait for state objects driven by a [`Reducer`](super::Reducer).
///
/// `PartialEq` lets the store skip notifications when a transition was a no-op.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
