use std::io;
use std::sync::Arc;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use semdeck::app::theme::{detect_terminal_color_support, DeckTheme};
use semdeck::app::Controller;
use semdeck::config::RunConfig;
use semdeck::deck::Deck;
use semdeck::logging;
use semdeck::tui::events::EventPump;
use semdeck::tui::fullscreen::XtermFullscreen;
use semdeck::tui::terminal_guard::TerminalGuard;

fn main() -> io::Result<()> {
    let config = RunConfig::load();
    let _logging = logging::init();

    let guard = TerminalGuard::new()?;

    #[cfg(unix)]
    let signal_rx = {
        let (tx, rx) = std::sync::mpsc::channel();
        semdeck::tui::terminal_guard::install_termination_signals(guard.restorer(), tx)?;
        rx
    };

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let support = config
        .color_support()
        .unwrap_or_else(detect_terminal_color_support);
    let theme = DeckTheme::for_support(support);

    let fullscreen = Arc::new(XtermFullscreen::detect());
    let mut controller = Controller::new(Deck::semantic_web(), fullscreen, config.start_slide);
    let mut pump = EventPump::new(config.tick_rate());

    while !controller.should_quit() {
        #[cfg(unix)]
        if let Ok(signal) = signal_rx.try_recv() {
            guard.restorer().restore()?;
            std::process::exit(signal.exit_code());
        }

        terminal.draw(|frame| controller.render(frame, &theme))?;
        let event = pump.next()?;
        controller.handle_event(&event);
    }

    Ok(())
}
