use crate::mvi::Reducer;
use crate::portal::projects::intent::ProjectIntent;
use crate::portal::projects::state::{Project, ProjectBoardState};

pub struct ProjectsReducer;

impl Reducer for ProjectsReducer {
    type State = ProjectBoardState;
    type Intent = ProjectIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProjectIntent::Add { id, name } => {
                let name = name.trim();
                if name.is_empty() {
                    return state;
                }
                let id = unique_id(&state.projects, id);
                let mut projects = state.projects;
                projects.push(Project::new(id, name));
                ProjectBoardState { projects, ..state }
            }
            ProjectIntent::SetProgress { id, value } => {
                if !(0..=100).contains(&value) {
                    return state;
                }
                let progress = value as u8;
                let projects = state
                    .projects
                    .into_iter()
                    .map(|p| {
                        if p.id == id {
                            Project { progress, ..p }
                        } else {
                            p
                        }
                    })
                    .collect();
                ProjectBoardState { projects, ..state }
            }
            ProjectIntent::SubmitFeedback { id, author } => {
                if state.feedback_draft.trim().is_empty() {
                    return state;
                }
                let entry = format!("{}: {}", author, state.feedback_draft);
                let projects = state
                    .projects
                    .into_iter()
                    .map(|p| {
                        if p.id == id {
                            let mut feedback = p.feedback;
                            feedback.push(entry.clone());
                            Project { feedback, ..p }
                        } else {
                            p
                        }
                    })
                    .collect();
                ProjectBoardState {
                    projects,
                    feedback_draft: String::new(),
                    ..state
                }
            }
            ProjectIntent::Rate { id, stars } => {
                if !(1..=5).contains(&stars) {
                    return state;
                }
                let projects = state
                    .projects
                    .into_iter()
                    .map(|p| {
                        if p.id == id {
                            let mut ratings = p.ratings;
                            ratings.push(stars);
                            Project { ratings, ..p }
                        } else {
                            p
                        }
                    })
                    .collect();
                ProjectBoardState { projects, ..state }
            }
            ProjectIntent::Join { id, member } => {
                let projects = state
                    .projects
                    .into_iter()
                    .map(|p| {
                        if p.id == id && !p.members.contains(&member) {
                            let mut members = p.members;
                            members.push(member.clone());
                            Project { members, ..p }
                        } else {
                            p
                        }
                    })
                    .collect();
                ProjectBoardState { projects, ..state }
            }
            ProjectIntent::FeedbackInput(ch) => {
                let mut draft = state.feedback_draft;
                draft.push(ch);
                ProjectBoardState {
                    feedback_draft: draft,
                    ..state
                }
            }
            ProjectIntent::FeedbackBackspace => {
                let mut draft = state.feedback_draft;
                draft.pop();
                ProjectBoardState {
                    feedback_draft: draft,
                    ..state
                }
            }
            ProjectIntent::MoveUp => move_selection(state, -1),
            ProjectIntent::MoveDown => move_selection(state, 1),
        }
    }
}

/// Bump the candidate id until it does not collide with an existing project.
fn unique_id(projects: &[Project], candidate: u64) -> u64 {
    let mut id = candidate;
    while projects.iter().any(|p| p.id == id) {
        id += 1;
    }
    id
}

fn move_selection(state: ProjectBoardState, direction: i32) -> ProjectBoardState {
    if state.projects.is_empty() {
        return ProjectBoardState {
            selected: 0,
            ..state
        };
    }
    let len = state.projects.len();
    let current = state.selected.min(len - 1);
    let selected = if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    };
    ProjectBoardState { selected, ..state }
}
