use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ChatIntent {
    /// Type into the composer.
    Input(char),
    Backspace,
    /// Append the draft as `"author: text"` and clear it. Blank drafts
    /// are ignored.
    Send { author: String },
}

impl Intent for ChatIntent {}
