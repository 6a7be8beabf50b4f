//! Headless portal core.
//!
//! One MVI feature module per store: session, projects, announcements,
//! chat. Reducers here are pure and never touch the terminal, which is
//! what makes every transition unit-testable in isolation.

pub mod announcements;
pub mod chat;
pub mod projects;
pub mod session;
