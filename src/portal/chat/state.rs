use crate::mvi::UiState;

/// Single shared chat channel. Messages are `"author: text"` strings,
/// append-only; there are no rooms and no delivery beyond the local log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatLogState {
    pub messages: Vec<String>,
    /// Composer draft on the student dashboard.
    pub draft: String,
}

impl UiState for ChatLogState {}
