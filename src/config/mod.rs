//! Configuration: seed roster and runtime defaults, loaded from TOML.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, Defaults, SeedAnnouncement, SeedProject};
