//! Application layer: the presentation controller and its chrome.

pub mod controller;
pub mod theme;

pub use controller::{Controller, EventResult};
