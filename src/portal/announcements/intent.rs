use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AnnouncementIntent {
    /// Type into the composer.
    Input(char),
    Backspace,
    /// Append the draft to the log and clear it. Blank drafts are ignored.
    Post,
}

impl Intent for AnnouncementIntent {}
