use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Type a character into the focused form field.
    Input(char),
    /// Delete the last character of the focused form field.
    Backspace,
    FocusNext,
    FocusPrev,
    /// Flip the role selector between Student and Teacher.
    ToggleRole,
    /// Attempt login with the current form contents.
    Submit,
    DismissAlert,
    Logout,
}

impl Intent for SessionIntent {}
