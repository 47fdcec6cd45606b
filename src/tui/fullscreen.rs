//! Fullscreen surface for the host terminal.
//!
//! Terminal emulators expose window fullscreen through XTWINOPS escape
//! sequences, and only some of them honor those. The capability probe runs
//! once; the rest of the app talks to a uniform `FullscreenOps` surface and
//! treats an unsupported emulator as a silent no-op. Requests are
//! fire-and-forget: the navigation flag is reconciled later from a change
//! notification, never assumed from the request itself.

use std::io::{self, Write};

/// Uniform enter/exit surface over the emulator's fullscreen capability.
pub trait FullscreenOps: Send + Sync + 'static {
    fn supported(&self) -> bool;

    /// Ask the emulator to enter fullscreen. Fire-and-forget.
    fn request(&self) -> io::Result<()>;

    /// Ask the emulator to leave fullscreen. Fire-and-forget.
    fn exit(&self) -> io::Result<()>;
}

// XTWINOPS window manipulation: CSI 10 ; Ps t with Ps 1 = enter, 0 = exit.
const ENTER_FULLSCREEN: &[u8] = b"\x1b[10;1t";
const EXIT_FULLSCREEN: &[u8] = b"\x1b[10;0t";

/// XTWINOPS-based implementation, probed from the environment.
#[derive(Debug)]
pub struct XtermFullscreen {
    supported: bool,
}

impl XtermFullscreen {
    pub fn detect() -> Self {
        let term = std::env::var("TERM").unwrap_or_default();
        let term_program = std::env::var("TERM_PROGRAM").unwrap_or_default();
        let supported = probe(&term, &term_program);
        if !supported {
            tracing::debug!(%term, %term_program, "terminal does not honor XTWINOPS fullscreen");
        }
        Self { supported }
    }

    #[cfg(test)]
    pub fn with_support(supported: bool) -> Self {
        Self { supported }
    }

    fn write_sequence(&self, seq: &[u8]) -> io::Result<()> {
        if !self.supported {
            return Ok(());
        }
        let mut stdout = io::stdout();
        stdout.write_all(seq)?;
        stdout.flush()
    }
}

impl FullscreenOps for XtermFullscreen {
    fn supported(&self) -> bool {
        self.supported
    }

    fn request(&self) -> io::Result<()> {
        tracing::debug!(supported = self.supported, "fullscreen enter requested");
        self.write_sequence(ENTER_FULLSCREEN)
    }

    fn exit(&self) -> io::Result<()> {
        tracing::debug!(supported = self.supported, "fullscreen exit requested");
        self.write_sequence(EXIT_FULLSCREEN)
    }
}

/// Emulators known to honor XTWINOPS window ops. The historically messy part
/// of the platform lives entirely in this one probe.
pub fn probe(term: &str, term_program: &str) -> bool {
    let term = term.to_ascii_lowercase();
    let term_program = term_program.to_ascii_lowercase();

    if term_program.contains("iterm") || term_program.contains("wezterm") {
        return true;
    }
    term.starts_with("xterm")
        || term.contains("wezterm")
        || term.contains("foot")
        || term.contains("rxvt")
}

#[cfg(test)]
#[path = "../../tests/unit/tui/fullscreen.rs"]
mod tests;
