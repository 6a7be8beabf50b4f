mod intent;
mod reducer;
mod state;

pub use intent::ProjectIntent;
pub use reducer::ProjectsReducer;
pub use state::{average_rating, format_average, Project, ProjectBoardState, NO_RATINGS};

use std::time::{SystemTime, UNIX_EPOCH};

/// Time-based candidate id for a new project (unix millis). The reducer
/// bumps collisions, so two adds in the same millisecond stay unique.
pub fn next_project_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
