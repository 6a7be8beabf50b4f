use crate::mvi::UiState;

/// What the prompt is collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Name for a new project.
    NewProject,
    /// New progress percentage for one project.
    Progress { project_id: u64 },
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::NewProject => "New Project",
            PromptKind::Progress { .. } => "Update Progress",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            PromptKind::NewProject => "Enter project name",
            PromptKind::Progress { .. } => "Enter progress % (0-100)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PromptState {
    #[default]
    Hidden,
    Visible {
        kind: PromptKind,
        input: String,
    },
}

impl UiState for PromptState {}

impl PromptState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
