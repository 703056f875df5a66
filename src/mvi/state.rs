//! Marker trait for slice state.

/// Slice state: cloned into snapshots, compared to detect changes, and
/// defaulted to produce the initial store.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
