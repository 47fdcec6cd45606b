//! semdeck - terminal slideshow for the "Web Sémantique" lecture deck
//!
//! Module structure:
//! - core: navigation core (NavigationState, keymap, input events)
//! - deck: the static slide registry and the fourteen slide bodies
//! - app: presentation controller, chrome rendering, theme
//! - tui: terminal integration (guard, event pump, fullscreen surface)

pub mod app;
pub mod config;
pub mod core;
pub mod deck;
pub mod logging;
pub mod tui;
