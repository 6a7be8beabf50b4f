use tracing::{debug, info};

use crate::config::ConfigStore;
use crate::mvi::Reducer;
use crate::portal::announcements::{AnnouncementBoardState, AnnouncementIntent, AnnouncementsReducer};
use crate::portal::chat::{ChatIntent, ChatLogState, ChatReducer};
use crate::portal::projects::{
    next_project_id, Project, ProjectBoardState, ProjectIntent, ProjectsReducer,
};
use crate::portal::session::{Role, SessionIntent, SessionReducer, SessionState, User};
use crate::ui::prompt::{PromptIntent, PromptKind, PromptReducer, PromptState};

/// The three derived screens. Which one renders is a pure function of the
/// session state; there are no other screens or transitions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Login,
    Teacher,
    Student,
}

/// Derive the active screen from the session state.
pub fn screen_for(session: &SessionState) -> Screen {
    match session.user() {
        None => Screen::Login,
        Some(User {
            role: Role::Teacher,
            ..
        }) => Screen::Teacher,
        Some(User {
            role: Role::Student,
            ..
        }) => Screen::Student,
    }
}

/// Which dashboard panel receives typed input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Panel {
    /// Project list (navigation and per-project actions).
    Projects,
    /// Announcement composer (teacher) or feedback composer (student).
    Composer,
    /// Chat composer (student only).
    Chat,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Dashboard panel focus. Reset on every screen change.
    panel: Panel,
    session: SessionState,
    projects: ProjectBoardState,
    announcements: AnnouncementBoardState,
    chat: ChatLogState,
    /// Modal input prompt (MVI pattern).
    prompt: PromptState,
    config: ConfigStore,
}

impl App {
    /// Build the initial state from the configured seed roster.
    pub fn new(config: ConfigStore) -> Self {
        let seed = config.get();
        let projects = seed
            .projects
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let mut project = Project::new(index as u64 + 1, p.name.clone());
                project.progress = p.progress.min(100);
                project
            })
            .collect();
        let announcements = seed.announcements.iter().map(|a| a.text.clone()).collect();

        Self {
            should_quit: false,
            panel: Panel::Projects,
            session: SessionState::default(),
            projects: ProjectBoardState::seeded(projects),
            announcements: AnnouncementBoardState::seeded(announcements),
            chat: ChatLogState::default(),
            prompt: PromptState::default(),
            config,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        screen_for(&self.session)
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn projects(&self) -> &ProjectBoardState {
        &self.projects
    }

    pub fn announcements(&self) -> &AnnouncementBoardState {
        &self.announcements
    }

    pub fn chat(&self) -> &ChatLogState {
        &self.chat
    }

    pub fn prompt(&self) -> &PromptState {
        &self.prompt
    }

    /// The login validation alert, if one is showing.
    pub fn alert(&self) -> Option<&str> {
        self.session.alert()
    }

    /// Cycle panel focus. The teacher dashboard has no chat panel.
    pub fn cycle_panel(&mut self) {
        self.panel = match (self.screen(), self.panel) {
            (Screen::Teacher, Panel::Projects) => Panel::Composer,
            (Screen::Teacher, _) => Panel::Projects,
            (Screen::Student, Panel::Projects) => Panel::Composer,
            (Screen::Student, Panel::Composer) => Panel::Chat,
            (Screen::Student, Panel::Chat) => Panel::Projects,
            (Screen::Login, panel) => panel,
        };
    }

    // ========================================================================
    // Session (MVI pattern)
    // ========================================================================

    pub fn dispatch_session(&mut self, intent: SessionIntent) {
        dispatch_mvi!(self, session, SessionReducer, intent);
    }

    /// Submit the login form; returns to `Panel::Projects` on success.
    pub fn submit_login(&mut self) {
        self.dispatch_session(SessionIntent::Submit);
        match self.session.user() {
            Some(user) => {
                info!(name = %user.name, role = user.role.label(), "login");
                self.panel = Panel::Projects;
            }
            None => debug!("login rejected: blank name or password"),
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            info!(name = %user.name, "logout");
        }
        self.dispatch_session(SessionIntent::Logout);
        self.panel = Panel::Projects;
    }

    // ========================================================================
    // Projects (MVI pattern)
    // ========================================================================

    pub fn dispatch_projects(&mut self, intent: ProjectIntent) {
        dispatch_mvi!(self, projects, ProjectsReducer, intent);
    }

    /// Join the selected project as the logged-in user (idempotent).
    pub fn join_selected(&mut self) {
        let Some(member) = self.session.user().map(|u| u.name.clone()) else {
            return;
        };
        let Some(id) = self.projects.selected_project().map(|p| p.id) else {
            return;
        };
        self.dispatch_projects(ProjectIntent::Join { id, member });
    }

    /// Record a star vote for the selected project.
    pub fn rate_selected(&mut self, stars: u8) {
        let Some(id) = self.projects.selected_project().map(|p| p.id) else {
            return;
        };
        self.dispatch_projects(ProjectIntent::Rate { id, stars });
    }

    /// Submit the feedback draft against the selected project.
    pub fn submit_feedback(&mut self) {
        let Some(author) = self.session.user().map(|u| u.name.clone()) else {
            return;
        };
        let Some(id) = self.projects.selected_project().map(|p| p.id) else {
            return;
        };
        self.dispatch_projects(ProjectIntent::SubmitFeedback { id, author });
    }

    // ========================================================================
    // Announcements / chat (MVI pattern)
    // ========================================================================

    pub fn dispatch_announcements(&mut self, intent: AnnouncementIntent) {
        dispatch_mvi!(self, announcements, AnnouncementsReducer, intent);
    }

    pub fn post_announcement(&mut self) {
        let before = self.announcements.entries.len();
        self.dispatch_announcements(AnnouncementIntent::Post);
        if self.announcements.entries.len() > before {
            info!("announcement posted");
        }
    }

    pub fn dispatch_chat(&mut self, intent: ChatIntent) {
        dispatch_mvi!(self, chat, ChatReducer, intent);
    }

    pub fn send_chat(&mut self) {
        let Some(author) = self.session.user().map(|u| u.name.clone()) else {
            return;
        };
        self.dispatch_chat(ChatIntent::Send { author });
    }

    // ========================================================================
    // Input prompt (MVI pattern)
    // ========================================================================

    pub fn dispatch_prompt(&mut self, intent: PromptIntent) {
        dispatch_mvi!(self, prompt, PromptReducer, intent);
    }

    pub fn open_new_project_prompt(&mut self) {
        self.dispatch_prompt(PromptIntent::Open {
            kind: PromptKind::NewProject,
        });
    }

    /// Open the progress prompt for the selected project, if any.
    pub fn open_progress_prompt(&mut self) {
        let Some(id) = self.projects.selected_project().map(|p| p.id) else {
            return;
        };
        self.dispatch_prompt(PromptIntent::Open {
            kind: PromptKind::Progress { project_id: id },
        });
    }

    /// Consume the prompt input and route it into the portal.
    ///
    /// Empty input means "no action", as does a progress value that is
    /// not an integer in 0..=100 (the reducer range-checks again).
    pub fn submit_prompt(&mut self) {
        let PromptState::Visible { kind, input } = std::mem::take(&mut self.prompt) else {
            return;
        };
        match kind {
            PromptKind::NewProject => {
                let name = input.trim();
                if name.is_empty() {
                    return;
                }
                info!(name = %name, "project added");
                self.dispatch_projects(ProjectIntent::Add {
                    id: next_project_id(),
                    name: name.to_string(),
                });
            }
            PromptKind::Progress { project_id } => {
                let Ok(value) = input.trim().parse::<i64>() else {
                    debug!(input = %input, "progress input ignored: not an integer");
                    return;
                };
                self.dispatch_projects(ProjectIntent::SetProgress {
                    id: project_id,
                    value,
                });
            }
        }
    }
}
