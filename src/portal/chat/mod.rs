mod intent;
mod reducer;
mod state;

pub use intent::ChatIntent;
pub use reducer::ChatReducer;
pub use state::ChatLogState;
