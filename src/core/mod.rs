//! Framework-independent navigation core.
//!
//! Nothing in here touches the terminal: the state machine and the keyboard
//! dispatcher operate on plain event values so they can be exercised directly
//! in tests.

pub mod event;
pub mod keymap;
pub mod nav;

pub use event::{AppEvent, InputEvent, Key};
pub use keymap::NavCommand;
pub use nav::NavigationState;
