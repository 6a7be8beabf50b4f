mod intent;
mod reducer;
mod state;

pub use intent::AnnouncementIntent;
pub use reducer::AnnouncementsReducer;
pub use state::AnnouncementBoardState;
