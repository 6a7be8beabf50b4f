//! Base trait for state snapshots.

/// Marker trait for state objects.
///
/// A state is:
/// - Immutable (reducers consume the old snapshot and build a new one)
/// - Self-contained (a view renders from the state alone)
/// - Comparable (`PartialEq` so unchanged state is detectable)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
