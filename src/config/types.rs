use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// The built-in defaults mirror the seed roster the portal ships with, so
/// a missing config file still produces a usable classroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    /// Seed projects shown on first start.
    #[serde(default = "default_projects")]
    pub projects: Vec<SeedProject>,
    /// Seed announcements shown on first start.
    #[serde(default = "default_announcements")]
    pub announcements: Vec<SeedAnnouncement>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            projects: default_projects(),
            announcements: default_announcements(),
        }
    }
}

/// Runtime defaults for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Event-loop tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// A project present at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedProject {
    pub name: String,
    /// Initial completion percentage (0..=100).
    #[serde(default)]
    pub progress: u8,
}

/// An announcement present at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAnnouncement {
    pub text: String,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_projects() -> Vec<SeedProject> {
    vec![
        SeedProject {
            name: "AI Chatbot".to_string(),
            progress: 50,
        },
        SeedProject {
            name: "Portfolio Website".to_string(),
            progress: 70,
        },
    ]
}

fn default_announcements() -> Vec<SeedAnnouncement> {
    vec![
        SeedAnnouncement {
            text: "Welcome to Peer Review Week!".to_string(),
        },
        SeedAnnouncement {
            text: "Submit your project by Friday.".to_string(),
        },
    ]
}
