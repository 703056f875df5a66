//! Marker trait for slice actions.

/// Marker trait for intent objects.
///
/// Intents are either user actions (start/stop loading) or lifecycle events
/// of an async operation (pending, fulfilled, rejected).
pub trait Intent: Send + 'static {}
