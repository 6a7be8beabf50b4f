use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::portal::announcements::AnnouncementIntent;
use crate::portal::chat::ChatIntent;
use crate::portal::projects::ProjectIntent;
use crate::portal::session::SessionIntent;
use crate::ui::app::{App, Panel, Screen};
use crate::ui::prompt::PromptIntent;

/// Route a key event. Modal surfaces take precedence: the input prompt
/// first, then the validation alert, then the active screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.prompt().is_visible() {
        handle_prompt_key(app, key);
        return;
    }

    if app.alert().is_some() {
        // The alert is modal: only dismissal gets through.
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dispatch_session(SessionIntent::DismissAlert);
        }
        return;
    }

    match app.screen() {
        Screen::Login => handle_login_key(app, key),
        Screen::Teacher => handle_teacher_key(app, key),
        Screen::Student => handle_student_key(app, key),
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_prompt(PromptIntent::Cancel),
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Backspace => app.dispatch_prompt(PromptIntent::Backspace),
        KeyCode::Char(ch) => app.dispatch_prompt(PromptIntent::Input(ch)),
        _ => {}
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_session(SessionIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_session(SessionIntent::FocusPrev),
        KeyCode::Left | KeyCode::Right => app.dispatch_session(SessionIntent::ToggleRole),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.dispatch_session(SessionIntent::Backspace),
        KeyCode::Char(ch) => app.dispatch_session(SessionIntent::Input(ch)),
        _ => {}
    }
}

fn handle_teacher_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }
    if matches!(key.code, KeyCode::Tab) {
        app.cycle_panel();
        return;
    }

    match app.panel() {
        Panel::Composer => match key.code {
            KeyCode::Enter => app.post_announcement(),
            KeyCode::Backspace => app.dispatch_announcements(AnnouncementIntent::Backspace),
            KeyCode::Char(ch) => app.dispatch_announcements(AnnouncementIntent::Input(ch)),
            _ => {}
        },
        // Teacher has no chat panel; Projects handles the rest.
        _ => match key.code {
            KeyCode::Up => app.dispatch_projects(ProjectIntent::MoveUp),
            KeyCode::Down => app.dispatch_projects(ProjectIntent::MoveDown),
            KeyCode::Char('a') => app.open_new_project_prompt(),
            KeyCode::Char('e') | KeyCode::Enter => app.open_progress_prompt(),
            _ => {}
        },
    }
}

fn handle_student_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }
    if matches!(key.code, KeyCode::Tab) {
        app.cycle_panel();
        return;
    }

    match app.panel() {
        Panel::Projects => match key.code {
            KeyCode::Up => app.dispatch_projects(ProjectIntent::MoveUp),
            KeyCode::Down => app.dispatch_projects(ProjectIntent::MoveDown),
            KeyCode::Char('j') => app.join_selected(),
            KeyCode::Char(ch @ '1'..='5') => {
                let stars = ch.to_digit(10).unwrap_or(0) as u8;
                app.rate_selected(stars);
            }
            _ => {}
        },
        Panel::Composer => match key.code {
            KeyCode::Enter => app.submit_feedback(),
            KeyCode::Backspace => app.dispatch_projects(ProjectIntent::FeedbackBackspace),
            KeyCode::Char(ch) => app.dispatch_projects(ProjectIntent::FeedbackInput(ch)),
            _ => {}
        },
        Panel::Chat => match key.code {
            KeyCode::Enter => app.send_chat(),
            KeyCode::Backspace => app.dispatch_chat(ChatIntent::Backspace),
            KeyCode::Char(ch) => app.dispatch_chat(ChatIntent::Input(ch)),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
