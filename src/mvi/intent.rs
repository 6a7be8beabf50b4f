//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is a user action (keystroke, submit) or a system event.
/// Intents are the only way state transitions happen.
pub trait Intent: Send + 'static {}
