use crate::mvi::UiState;

/// Role chosen at login. Decides which dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Role::Student => Role::Teacher,
            Role::Teacher => Role::Student,
        }
    }
}

/// Logged-in identity. Created at login, dropped at logout, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub role: Role,
}

/// Which login-form field holds the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Name,
    Password,
    Role,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Name => LoginField::Password,
            LoginField::Password => LoginField::Role,
            LoginField::Role => LoginField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Name => LoginField::Role,
            LoginField::Password => LoginField::Name,
            LoginField::Role => LoginField::Password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub name: String,
    pub password: String,
    pub role: Role,
    pub focus: LoginField,
}

/// Session state machine: `LoggedOut` (the login form) or `LoggedIn`.
/// The validation alert is modal; while set, the form swallows all input
/// except dismissal.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    LoggedOut {
        form: LoginForm,
        alert: Option<String>,
    },
    LoggedIn {
        user: User,
    },
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::LoggedOut {
            form: LoginForm::default(),
            alert: None,
        }
    }
}

impl UiState for SessionState {}

impl SessionState {
    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::LoggedIn { user } => Some(user),
            SessionState::LoggedOut { .. } => None,
        }
    }

    /// Pending validation alert, if any.
    pub fn alert(&self) -> Option<&str> {
        match self {
            SessionState::LoggedOut { alert, .. } => alert.as_deref(),
            SessionState::LoggedIn { .. } => None,
        }
    }
}
