use crate::mvi::UiState;

/// One-way broadcast log from teacher to students. Entries carry no
/// author and no timestamp; append order is the only ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnouncementBoardState {
    pub entries: Vec<String>,
    /// Composer draft on the teacher dashboard.
    pub draft: String,
}

impl UiState for AnnouncementBoardState {}

impl AnnouncementBoardState {
    pub fn seeded(entries: Vec<String>) -> Self {
        Self {
            entries,
            draft: String::new(),
        }
    }
}
