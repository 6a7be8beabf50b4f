use crate::mvi::UiState;

/// Sentinel shown when a project has no star votes yet.
pub const NO_RATINGS: &str = "No ratings yet";

/// A unit of tracked work: progress plus peer feedback, star ratings and
/// membership. Projects are never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    /// Append-only "author: text" comments.
    pub feedback: Vec<String>,
    /// Star votes in 1..=5. Repeat votes from the same user are recorded
    /// independently; there is no identity check.
    pub ratings: Vec<u8>,
    /// Member names. Joining is idempotent, there is no removal.
    pub members: Vec<String>,
    /// Completion percentage, always within 0..=100.
    pub progress: u8,
}

impl Project {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            feedback: Vec::new(),
            ratings: Vec::new(),
            members: Vec::new(),
            progress: 0,
        }
    }

    pub fn average_rating(&self) -> Option<f64> {
        average_rating(&self.ratings)
    }
}

/// Arithmetic mean rounded to one decimal. `None` when the list is empty,
/// so an empty project can never divide by zero.
pub fn average_rating(ratings: &[u8]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Display form of the average: `"4.5"`, or the sentinel for no votes.
pub fn format_average(ratings: &[u8]) -> String {
    match average_rating(ratings) {
        Some(avg) => format!("{avg:.1}"),
        None => NO_RATINGS.to_string(),
    }
}

/// Ordered project list plus the dashboard cursor and the shared feedback
/// composer draft (one composer, applied to the selected project).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectBoardState {
    pub projects: Vec<Project>,
    pub selected: usize,
    pub feedback_draft: String,
}

impl UiState for ProjectBoardState {}

impl ProjectBoardState {
    pub fn seeded(projects: Vec<Project>) -> Self {
        Self {
            projects,
            selected: 0,
            feedback_draft: String::new(),
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    pub fn get(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_empty_is_none() {
        assert_eq!(average_rating(&[]), None);
        assert_eq!(format_average(&[]), NO_RATINGS);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[4, 5]), Some(4.5));
        assert_eq!(format_average(&[4, 5]), "4.5");
        // 1+2+2 = 5/3 = 1.666... -> 1.7
        assert_eq!(average_rating(&[1, 2, 2]), Some(1.7));
        assert_eq!(format_average(&[5, 5, 5]), "5.0");
    }

    #[test]
    fn new_project_starts_empty_at_zero_progress() {
        let p = Project::new(7, "AI Chatbot");
        assert_eq!(p.id, 7);
        assert!(p.feedback.is_empty());
        assert!(p.ratings.is_empty());
        assert!(p.members.is_empty());
        assert_eq!(p.progress, 0);
        assert_eq!(p.average_rating(), None);
    }

    #[test]
    fn lookup_by_id() {
        let state = ProjectBoardState::seeded(vec![Project::new(1, "a"), Project::new(2, "b")]);
        assert_eq!(state.get(2).map(|p| p.name.as_str()), Some("b"));
        assert!(state.get(3).is_none());
        assert_eq!(state.selected_project().map(|p| p.id), Some(1));
    }
}
