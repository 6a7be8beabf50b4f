//! Peerboard: a terminal peer-review portal for classrooms.
//!
//! Students and teachers sign in, read announcements, track project
//! progress, join projects, leave feedback and ratings, and chat. All
//! state lives in memory; the active screen is derived from the session
//! state and every mutation flows through a pure reducer.

pub mod config;
pub mod logging;
pub mod mvi;
pub mod portal;
pub mod ui;
