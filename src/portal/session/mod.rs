mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{LoginField, LoginForm, Role, SessionState, User};
