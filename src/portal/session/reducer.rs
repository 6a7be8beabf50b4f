use crate::mvi::Reducer;
use crate::portal::session::intent::SessionIntent;
use crate::portal::session::state::{LoginField, LoginForm, SessionState, User};

/// Message shown when a required login field is blank.
pub const EMPTY_LOGIN_ALERT: &str = "Please enter both name and password!";

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::Input(ch) => match state {
                SessionState::LoggedOut { form, alert: None } => SessionState::LoggedOut {
                    form: type_char(form, ch),
                    alert: None,
                },
                other => other,
            },
            SessionIntent::Backspace => match state {
                SessionState::LoggedOut { form, alert: None } => SessionState::LoggedOut {
                    form: erase_char(form),
                    alert: None,
                },
                other => other,
            },
            SessionIntent::FocusNext => match state {
                SessionState::LoggedOut { form, alert: None } => SessionState::LoggedOut {
                    form: LoginForm {
                        focus: form.focus.next(),
                        ..form
                    },
                    alert: None,
                },
                other => other,
            },
            SessionIntent::FocusPrev => match state {
                SessionState::LoggedOut { form, alert: None } => SessionState::LoggedOut {
                    form: LoginForm {
                        focus: form.focus.prev(),
                        ..form
                    },
                    alert: None,
                },
                other => other,
            },
            SessionIntent::ToggleRole => match state {
                SessionState::LoggedOut { form, alert: None } => SessionState::LoggedOut {
                    form: LoginForm {
                        role: form.role.toggled(),
                        ..form
                    },
                    alert: None,
                },
                other => other,
            },
            SessionIntent::Submit => match state {
                SessionState::LoggedOut { form, alert: None } => submit(form),
                other => other,
            },
            SessionIntent::DismissAlert => match state {
                SessionState::LoggedOut { form, alert: Some(_) } => {
                    SessionState::LoggedOut { form, alert: None }
                }
                other => other,
            },
            // Logout resets the form fields along with the identity.
            SessionIntent::Logout => SessionState::default(),
        }
    }
}

fn submit(form: LoginForm) -> SessionState {
    if form.name.trim().is_empty() || form.password.trim().is_empty() {
        return SessionState::LoggedOut {
            form,
            alert: Some(EMPTY_LOGIN_ALERT.to_string()),
        };
    }
    // The password is checked for presence only; it is not validated or
    // retained beyond this call.
    SessionState::LoggedIn {
        user: User {
            name: form.name,
            role: form.role,
        },
    }
}

fn type_char(form: LoginForm, ch: char) -> LoginForm {
    let mut form = form;
    match form.focus {
        LoginField::Name => form.name.push(ch),
        LoginField::Password => form.password.push(ch),
        LoginField::Role => {}
    }
    form
}

fn erase_char(form: LoginForm) -> LoginForm {
    let mut form = form;
    match form.focus {
        LoginField::Name => {
            form.name.pop();
        }
        LoginField::Password => {
            form.password.pop();
        }
        LoginField::Role => {}
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::session::state::Role;

    fn reduce(state: SessionState, intent: SessionIntent) -> SessionState {
        SessionReducer::reduce(state, intent)
    }

    fn filled_form(name: &str, password: &str, role: Role) -> SessionState {
        let mut state = SessionState::default();
        for ch in name.chars() {
            state = reduce(state, SessionIntent::Input(ch));
        }
        state = reduce(state, SessionIntent::FocusNext);
        for ch in password.chars() {
            state = reduce(state, SessionIntent::Input(ch));
        }
        if role == Role::Teacher {
            state = reduce(state, SessionIntent::ToggleRole);
        }
        state
    }

    // -- login validation --------------------------------------------------

    #[test]
    fn submit_with_empty_name_sets_alert_and_stays_logged_out() {
        let state = filled_form("", "x", Role::Student);
        let state = reduce(state, SessionIntent::Submit);
        assert!(state.user().is_none());
        assert_eq!(state.alert(), Some(EMPTY_LOGIN_ALERT));
    }

    #[test]
    fn submit_with_whitespace_password_sets_alert() {
        let state = filled_form("Ada", "   ", Role::Student);
        let state = reduce(state, SessionIntent::Submit);
        assert!(state.user().is_none());
        assert!(state.alert().is_some());
    }

    #[test]
    fn submit_with_valid_fields_logs_in() {
        let state = filled_form("Ada", "pw", Role::Teacher);
        let state = reduce(state, SessionIntent::Submit);
        let user = state.user().expect("should be logged in");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.role, Role::Teacher);
    }

    #[test]
    fn failed_submit_keeps_typed_fields() {
        let state = filled_form("Ada", "", Role::Student);
        let state = reduce(state, SessionIntent::Submit);
        match state {
            SessionState::LoggedOut { form, .. } => assert_eq!(form.name, "Ada"),
            SessionState::LoggedIn { .. } => panic!("expected LoggedOut"),
        }
    }

    // -- alert modality ----------------------------------------------------

    #[test]
    fn alert_swallows_typing_until_dismissed() {
        let state = reduce(SessionState::default(), SessionIntent::Submit);
        assert!(state.alert().is_some());
        let state = reduce(state, SessionIntent::Input('x'));
        match &state {
            SessionState::LoggedOut { form, .. } => assert!(form.name.is_empty()),
            SessionState::LoggedIn { .. } => panic!("expected LoggedOut"),
        }
        let state = reduce(state, SessionIntent::DismissAlert);
        assert!(state.alert().is_none());
    }

    // -- logout ------------------------------------------------------------

    #[test]
    fn logout_clears_identity_and_form() {
        let state = filled_form("Ada", "pw", Role::Student);
        let state = reduce(state, SessionIntent::Submit);
        assert!(state.user().is_some());
        let state = reduce(state, SessionIntent::Logout);
        assert_eq!(state, SessionState::default());
    }

    // -- form editing ------------------------------------------------------

    #[test]
    fn backspace_edits_focused_field() {
        let state = filled_form("Ada", "pw", Role::Student);
        let state = reduce(state, SessionIntent::Backspace);
        match state {
            SessionState::LoggedOut { form, .. } => {
                assert_eq!(form.name, "Ada");
                assert_eq!(form.password, "p");
            }
            SessionState::LoggedIn { .. } => panic!("expected LoggedOut"),
        }
    }

    #[test]
    fn typing_on_role_field_is_ignored() {
        let mut state = SessionState::default();
        state = reduce(state, SessionIntent::FocusNext);
        state = reduce(state, SessionIntent::FocusNext);
        state = reduce(state, SessionIntent::Input('z'));
        match state {
            SessionState::LoggedOut { form, .. } => {
                assert!(form.name.is_empty());
                assert!(form.password.is_empty());
            }
            SessionState::LoggedIn { .. } => panic!("expected LoggedOut"),
        }
    }

    #[test]
    fn intents_are_noops_while_logged_in() {
        let state = filled_form("Ada", "pw", Role::Student);
        let state = reduce(state, SessionIntent::Submit);
        let after = reduce(state.clone(), SessionIntent::Input('x'));
        assert_eq!(after, state);
        let after = reduce(state.clone(), SessionIntent::Submit);
        assert_eq!(after, state);
    }
}
