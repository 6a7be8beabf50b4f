use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the default path of the configuration file.
    ///
    /// Uses `~/.config/peerboard/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config directory is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("peerboard").join("config.toml")
    }

    /// Loads configuration from the given file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - tick rate is non-zero
    /// - seed project names are non-blank
    /// - seed progress values stay within 0..=100
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        for project in &self.projects {
            if project.name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "seed project names must not be blank".to_string(),
                });
            }
            if project.progress > 100 {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "seed project '{}' has progress {} (max 100)",
                        project.name, project.progress
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/peerboard.toml")).unwrap();
        assert_eq!(config.projects.len(), 2);
    }

    #[test]
    fn valid_file_parses() {
        let file = write_config(
            r#"
            [defaults]
            tick_rate_ms = 100

            [[projects]]
            name = "Robotics"
            progress = 30

            [[announcements]]
            text = "Lab on Tuesday"
            "#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.defaults.tick_rate_ms, 100);
        assert_eq!(config.projects[0].progress, 30);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("[[projects }");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn progress_over_limit_fails_validation() {
        let file = write_config("[[projects]]\nname = \"X\"\nprogress = 150\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn blank_project_name_fails_validation() {
        let file = write_config("[[projects]]\nname = \"  \"\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn zero_tick_rate_fails_validation() {
        let file = write_config("[defaults]\ntick_rate_ms = 0\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
