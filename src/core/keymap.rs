//! Keyboard dispatch: key chords to navigation commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::event::Key;

/// Commands the presentation controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
    First,
    Last,
    ScrollUp,
    ScrollDown,
    ToggleFullscreen,
    /// Esc: leave fullscreen when active, otherwise quit.
    Escape,
    Quit,
}

/// Maps a key event to a command. Returns `None` for keys the deck does not
/// bind, and for release events (repeats count as presses).
pub fn command_for(event: &KeyEvent) -> Option<NavCommand> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = Key::from(*event);
    if key.modifiers == KeyModifiers::CONTROL {
        return match key.code {
            KeyCode::Char('f') => Some(NavCommand::ToggleFullscreen),
            KeyCode::Char('c') => Some(NavCommand::Quit),
            _ => None,
        };
    }
    if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
        return None;
    }

    match key.code {
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::PageDown => Some(NavCommand::Next),
        KeyCode::Left | KeyCode::PageUp => Some(NavCommand::Previous),
        KeyCode::Home => Some(NavCommand::First),
        KeyCode::End => Some(NavCommand::Last),
        KeyCode::Up => Some(NavCommand::ScrollUp),
        KeyCode::Down => Some(NavCommand::ScrollDown),
        KeyCode::Esc => Some(NavCommand::Escape),
        KeyCode::Char('q') => Some(NavCommand::Quit),
        KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
            Some(NavCommand::GoTo(ch as usize - '0' as usize))
        }
        _ => None,
    }
}
