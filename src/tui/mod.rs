//! Terminal integration (crossterm + ratatui).
//!
//! Kept separate from `core`/`deck` so the navigation logic never touches
//! terminal crates directly and stays testable headless.

pub mod events;
pub mod fullscreen;
pub mod terminal_guard;
