//! The presentation controller: owns the navigation state, the deck, and the
//! fullscreen surface, and turns events into state changes.

use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::core::event::{is_left_click, AppEvent, InputEvent, MousePosition};
use crate::core::keymap::{self, NavCommand};
use crate::core::nav::NavigationState;
use crate::deck::Deck;
use crate::tui::fullscreen::FullscreenOps;

mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

/// A clickable region recorded during the last render.
struct Hotspot {
    rect: Rect,
    command: NavCommand,
}

pub struct Controller {
    nav: NavigationState,
    deck: Deck,
    fullscreen_ops: Arc<dyn FullscreenOps>,
    /// Desired fullscreen state of an in-flight request, cleared once the
    /// terminal acknowledges (resize) or reports a state directly.
    pending_fullscreen: Option<bool>,
    scroll: u16,
    max_scroll: u16,
    hotspots: Vec<Hotspot>,
    should_quit: bool,
}

impl Controller {
    pub fn new(deck: Deck, fullscreen_ops: Arc<dyn FullscreenOps>, start_slide: usize) -> Self {
        let nav = NavigationState::with_start(deck.len(), start_slide);
        Self {
            nav,
            deck,
            fullscreen_ops,
            pending_fullscreen: None,
            scroll: 0,
            max_scroll: 0,
            hotspots: Vec::new(),
            should_quit: false,
        }
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: &AppEvent) -> EventResult {
        match event {
            AppEvent::Tick => EventResult::Ignored,
            AppEvent::FullscreenChanged(active) => {
                self.pending_fullscreen = None;
                if self.nav.apply_fullscreen(*active) {
                    tracing::debug!(active, "fullscreen reconciled from platform");
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            AppEvent::Input(input) => self.handle_input(input),
        }
    }

    fn handle_input(&mut self, input: &InputEvent) -> EventResult {
        match input {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(..) => {
                // A resize right after a fullscreen request is the terminal
                // acknowledging it; that is the change notification we get.
                if let Some(active) = self.pending_fullscreen.take() {
                    self.nav.apply_fullscreen(active);
                    tracing::debug!(active, "fullscreen reconciled from resize");
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) -> EventResult {
        match keymap::command_for(event) {
            Some(command) => self.apply(command),
            None => EventResult::Ignored,
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        match event.kind {
            MouseEventKind::ScrollUp => self.apply(NavCommand::ScrollUp),
            MouseEventKind::ScrollDown => self.apply(NavCommand::ScrollDown),
            _ if is_left_click(event) => {
                let pos = MousePosition::from_event(event);
                let command = self
                    .hotspots
                    .iter()
                    .find(|h| rect_contains(h.rect, pos.x, pos.y))
                    .map(|h| h.command);
                match command {
                    Some(command) => self.apply(command),
                    None => EventResult::Ignored,
                }
            }
            _ => EventResult::Ignored,
        }
    }

    pub fn apply(&mut self, command: NavCommand) -> EventResult {
        match command {
            NavCommand::Next => {
                if self.nav.next() {
                    self.scroll = 0;
                }
                EventResult::Consumed
            }
            NavCommand::Previous => {
                if self.nav.previous() {
                    self.scroll = 0;
                }
                EventResult::Consumed
            }
            NavCommand::GoTo(target) => {
                if self.nav.go_to(target) {
                    self.scroll = 0;
                }
                EventResult::Consumed
            }
            NavCommand::First => self.apply(NavCommand::GoTo(1)),
            NavCommand::Last => self.apply(NavCommand::GoTo(self.nav.len())),
            NavCommand::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                EventResult::Consumed
            }
            NavCommand::ScrollDown => {
                self.scroll = (self.scroll + 1).min(self.max_scroll);
                EventResult::Consumed
            }
            NavCommand::ToggleFullscreen => self.toggle_fullscreen(),
            NavCommand::Escape => {
                if self.nav.is_fullscreen() {
                    self.request_fullscreen(false)
                } else {
                    self.should_quit = true;
                    EventResult::Consumed
                }
            }
            NavCommand::Quit => {
                self.should_quit = true;
                EventResult::Consumed
            }
        }
    }

    /// Consults the mirrored platform state and requests the opposite. The
    /// flag itself is only written when the change notification arrives.
    fn toggle_fullscreen(&mut self) -> EventResult {
        let target = !self.nav.is_fullscreen();
        self.request_fullscreen(target)
    }

    fn request_fullscreen(&mut self, target: bool) -> EventResult {
        let result = if target {
            self.fullscreen_ops.request()
        } else {
            self.fullscreen_ops.exit()
        };
        match result {
            Ok(()) if self.fullscreen_ops.supported() => {
                self.pending_fullscreen = Some(target);
            }
            Ok(()) => {}
            Err(err) => {
                // The platform declined; state stays as-is until a later
                // notification says otherwise.
                tracing::debug!(%err, target, "fullscreen request failed");
            }
        }
        EventResult::Consumed
    }

    fn record_hotspot(&mut self, rect: Rect, command: NavCommand) {
        self.hotspots.push(Hotspot { rect, command });
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
#[path = "../../tests/unit/app/controller.rs"]
mod tests;
