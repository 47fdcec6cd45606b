use super::*;
use std::sync::Mutex;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::app::theme::DeckTheme;

#[derive(Default)]
struct FakeFullscreen {
    unsupported: bool,
    calls: Mutex<Vec<&'static str>>,
}

impl FullscreenOps for FakeFullscreen {
    fn supported(&self) -> bool {
        !self.unsupported
    }

    fn request(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn exit(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("exit");
        Ok(())
    }
}

fn controller_with(ops: Arc<FakeFullscreen>) -> Controller {
    Controller::new(Deck::semantic_web(), ops, 1)
}

fn controller() -> Controller {
    controller_with(Arc::new(FakeFullscreen::default()))
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn ctrl_key(code: KeyCode) -> AppEvent {
    AppEvent::Input(InputEvent::Key(KeyEvent::new(code, KeyModifiers::CONTROL)))
}

fn click(x: u16, y: u16) -> AppEvent {
    AppEvent::Input(InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }))
}

fn draw(ctrl: &mut Controller) {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    let theme = DeckTheme::default();
    terminal.draw(|frame| ctrl.render(frame, &theme)).unwrap();
}

#[test]
fn right_arrow_acts_like_next_and_is_consumed() {
    let mut ctrl = controller();
    let result = ctrl.handle_event(&key(KeyCode::Right));
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(ctrl.nav().current(), 2);
}

#[test]
fn next_clamps_at_the_last_slide() {
    let mut ctrl = controller();
    for _ in 0..13 {
        ctrl.handle_event(&key(KeyCode::Right));
    }
    assert_eq!(ctrl.nav().current(), 14);
    ctrl.handle_event(&key(KeyCode::Right));
    assert_eq!(ctrl.nav().current(), 14);
}

#[test]
fn previous_on_first_slide_is_a_noop() {
    let mut ctrl = controller();
    assert_eq!(ctrl.handle_event(&key(KeyCode::Left)), EventResult::Consumed);
    assert_eq!(ctrl.nav().current(), 1);
}

#[test]
fn digit_jumps_to_the_slide() {
    let mut ctrl = controller();
    ctrl.handle_event(&key(KeyCode::Char('7')));
    assert_eq!(ctrl.nav().current(), 7);
}

#[test]
fn go_to_out_of_range_leaves_state_unchanged() {
    let mut ctrl = controller();
    ctrl.apply(NavCommand::GoTo(99));
    assert_eq!(ctrl.nav().current(), 1);
}

#[test]
fn toggle_requests_but_does_not_flip_synchronously() {
    let ops = Arc::new(FakeFullscreen::default());
    let mut ctrl = controller_with(ops.clone());

    ctrl.handle_event(&ctrl_key(KeyCode::Char('f')));
    assert_eq!(&*ops.calls.lock().unwrap(), &["enter"]);
    assert!(!ctrl.nav().is_fullscreen());

    // The terminal acknowledges with a resize: now the flag follows.
    ctrl.handle_event(&AppEvent::Input(InputEvent::Resize(200, 60)));
    assert!(ctrl.nav().is_fullscreen());
}

#[test]
fn esc_requests_exit_while_fullscreen() {
    let ops = Arc::new(FakeFullscreen::default());
    let mut ctrl = controller_with(ops.clone());
    ctrl.handle_event(&AppEvent::FullscreenChanged(true));

    ctrl.handle_event(&key(KeyCode::Esc));
    assert_eq!(&*ops.calls.lock().unwrap(), &["exit"]);
    // Still fullscreen until the platform reports the change.
    assert!(ctrl.nav().is_fullscreen());
    assert!(!ctrl.should_quit());

    ctrl.handle_event(&AppEvent::FullscreenChanged(false));
    assert!(!ctrl.nav().is_fullscreen());
}

#[test]
fn esc_quits_when_windowed() {
    let mut ctrl = controller();
    ctrl.handle_event(&key(KeyCode::Esc));
    assert!(ctrl.should_quit());
}

#[test]
fn external_exit_notification_reconciles_the_flag() {
    let mut ctrl = controller();
    ctrl.handle_event(&AppEvent::FullscreenChanged(true));
    assert!(ctrl.nav().is_fullscreen());

    // e.g. the user left fullscreen through the window manager.
    ctrl.handle_event(&AppEvent::FullscreenChanged(false));
    assert!(!ctrl.nav().is_fullscreen());
}

#[test]
fn unsupported_platform_never_flips_the_flag() {
    let ops = Arc::new(FakeFullscreen {
        unsupported: true,
        ..FakeFullscreen::default()
    });
    let mut ctrl = controller_with(ops);

    ctrl.handle_event(&ctrl_key(KeyCode::Char('f')));
    ctrl.handle_event(&AppEvent::Input(InputEvent::Resize(200, 60)));
    assert!(!ctrl.nav().is_fullscreen());
}

#[test]
fn header_buttons_navigate() {
    let mut ctrl = controller();
    draw(&mut ctrl);

    // Next button sits after the back button and the counter.
    ctrl.handle_event(&click(15, 0));
    assert_eq!(ctrl.nav().current(), 2);

    draw(&mut ctrl);
    ctrl.handle_event(&click(2, 0));
    assert_eq!(ctrl.nav().current(), 1);
}

#[test]
fn dot_click_selects_the_slide() {
    let mut ctrl = controller();
    draw(&mut ctrl);

    // 14 dots, 2 cells apart, centered on an 80-column frame: strip starts
    // at x = 26, dots row is the first footer row (y = 22).
    let fifth_dot = (26 + 4 * 2, 22);
    assert_eq!(
        ctrl.handle_event(&click(fifth_dot.0, fifth_dot.1)),
        EventResult::Consumed
    );
    assert_eq!(ctrl.nav().current(), 5);
}

#[test]
fn click_outside_hotspots_is_ignored() {
    let mut ctrl = controller();
    draw(&mut ctrl);
    assert_eq!(ctrl.handle_event(&click(40, 10)), EventResult::Ignored);
    assert_eq!(ctrl.nav().current(), 1);
}

#[test]
fn scroll_is_bounded_below() {
    let mut ctrl = controller();
    draw(&mut ctrl);
    assert_eq!(ctrl.scroll, 0);
    ctrl.apply(NavCommand::ScrollUp);
    assert_eq!(ctrl.scroll, 0);
}

#[test]
fn slide_change_resets_scroll() {
    let mut ctrl = controller();
    draw(&mut ctrl);
    ctrl.apply(NavCommand::ScrollDown);
    ctrl.apply(NavCommand::ScrollDown);
    assert!(ctrl.scroll > 0);
    ctrl.apply(NavCommand::Next);
    assert_eq!(ctrl.scroll, 0);
}

#[test]
fn fullscreen_render_drops_the_chrome() {
    let mut ctrl = controller();
    ctrl.handle_event(&AppEvent::FullscreenChanged(true));
    draw(&mut ctrl);
    assert!(ctrl.hotspots.is_empty());
}

#[test]
fn rect_contains_is_exclusive_of_the_far_edge() {
    let rect = Rect {
        x: 2,
        y: 3,
        width: 4,
        height: 1,
    };
    assert!(rect_contains(rect, 2, 3));
    assert!(rect_contains(rect, 5, 3));
    assert!(!rect_contains(rect, 6, 3));
    assert!(!rect_contains(rect, 2, 4));
}
