use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProjectIntent {
    /// Add a project with a caller-generated candidate id (see
    /// `next_project_id`). Blank names are rejected.
    Add { id: u64, name: String },
    /// Overwrite one project's progress. Values outside 0..=100 are
    /// silently ignored.
    SetProgress { id: u64, value: i64 },
    /// Append the feedback draft as `"author: text"` to one project and
    /// clear the draft. A blank draft is a no-op.
    SubmitFeedback { id: u64, author: String },
    /// Record one star vote (1..=5) for a project.
    Rate { id: u64, stars: u8 },
    /// Add a member to a project if not already present.
    Join { id: u64, member: String },
    /// Type into the feedback composer.
    FeedbackInput(char),
    FeedbackBackspace,
    /// Move the list cursor, wrapping at the ends.
    MoveUp,
    MoveDown,
}

impl Intent for ProjectIntent {}
