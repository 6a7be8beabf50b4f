use crate::mvi::Intent;
use crate::ui::prompt::state::PromptKind;

#[derive(Debug, Clone)]
pub enum PromptIntent {
    /// Open the prompt with an empty input line.
    Open { kind: PromptKind },
    /// Type a character into the input line.
    Input(char),
    Backspace,
    /// Close without producing a value.
    Cancel,
}

impl Intent for PromptIntent {}
