//! Run configuration: a small optional TOML file, environment-overridable.
//! A missing file means defaults; a malformed one logs a warning and falls
//! back rather than refusing to start the show.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::app::theme::{parse_color_support, TerminalColorSupport};

const CONFIG_ENV: &str = "SEMDECK_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "semdeck.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Event-poll timeout in milliseconds.
    pub tick_rate_ms: u64,
    /// Slide to open on (clamped into the deck by the controller).
    pub start_slide: usize,
    /// Force a color mode instead of probing the terminal.
    pub color_support: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            start_slide: 1,
            color_support: None,
        }
    }
}

impl RunConfig {
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn color_support(&self) -> Option<TerminalColorSupport> {
        self.color_support
            .as_deref()
            .and_then(parse_color_support)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn parses_known_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("semdeck.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "tick_rate_ms = 100").unwrap();
        writeln!(file, "start_slide = 5").unwrap();
        writeln!(file, "color_support = \"256\"").unwrap();

        let config = RunConfig::load_from(&path);
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.start_slide, 5);
        assert_eq!(config.color_support(), Some(TerminalColorSupport::Ansi256));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("semdeck.toml");
        std::fs::write(&path, "tick_rate_ms = \"soon\"").unwrap();

        assert_eq!(RunConfig::load_from(&path), RunConfig::default());
    }

    #[test]
    fn unknown_color_support_is_none() {
        let config = RunConfig {
            color_support: Some("plaid".into()),
            ..RunConfig::default()
        };
        assert_eq!(config.color_support(), None);
    }
}
