//! Modal single-line input prompt.
//!
//! Replaces blocking input dialogs: the app opens the prompt, keystrokes
//! accumulate in its state, and Enter hands the captured string back to
//! the app, which routes it into the matching portal intent. Esc (or an
//! empty submit) means "no action".

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_prompt_dialog;
pub use intent::PromptIntent;
pub use reducer::PromptReducer;
pub use state::{PromptKind, PromptState};
