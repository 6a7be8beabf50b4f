//! Thread-safe configuration storage.
//!
//! A simple in-memory config container with interior mutability: the UI
//! thread reads it, and a future reload path can swap it atomically.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container.
///
/// `get` clones the current snapshot, which is cheap because `Config`
/// is small and `Clone`.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        let mut guard = self.inner.write().expect("config lock poisoned");
        *guard = config;
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn get_returns_stored_config() {
        let store = ConfigStore::new(Config::default(), PathBuf::from("/tmp/peerboard.toml"));
        assert_eq!(store.get().projects.len(), 2);
        assert_eq!(store.path(), Path::new("/tmp/peerboard.toml"));
    }

    #[test]
    fn reload_swaps_in_new_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[defaults]\ntick_rate_ms = 100\n").unwrap();
        let store = ConfigStore::new(Config::default(), file.path().to_path_buf());
        assert_eq!(store.get().defaults.tick_rate_ms, 250);
        store.reload().unwrap();
        assert_eq!(store.get().defaults.tick_rate_ms, 100);
    }

    #[test]
    fn failed_reload_keeps_old_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[defaults]\ntick_rate_ms = 0\n").unwrap();
        let store = ConfigStore::new(Config::default(), file.path().to_path_buf());
        assert!(store.reload().is_err());
        assert_eq!(store.get().defaults.tick_rate_ms, 250);
    }
}
