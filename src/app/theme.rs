//! Deck colors, kept in one place instead of scattered through the slide
//! builders. The palette mirrors the lecture's original look: slate chrome,
//! blue/purple accents, green for the "win" items, amber for callouts.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct DeckTheme {
    pub accent: Color,
    pub accent_alt: Color,
    pub ok: Color,
    pub warn: Color,
    pub err: Color,
    pub heading: Color,
    pub text: Color,
    pub muted: Color,
    pub code_fg: Color,
    pub code_bg: Color,
    pub chrome_fg: Color,
    pub chrome_bg: Color,
    pub dot_active: Color,
    pub dot_inactive: Color,
    pub card_border: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("SEMDECK_COLOR_SUPPORT") {
        if let Some(support) = parse_color_support(&value) {
            return support;
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor")
        || colorterm.contains("24bit")
        || colorterm.contains("direct")
        || term.contains("truecolor")
        || term.contains("24bit")
        || term.contains("direct")
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

pub fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

impl DeckTheme {
    pub fn for_support(support: TerminalColorSupport) -> Self {
        match support {
            TerminalColorSupport::TrueColor => Self::default(),
            TerminalColorSupport::Ansi256 | TerminalColorSupport::Ansi16 => Self::ansi(),
        }
    }

    /// Indexed-color fallback for terminals without RGB support.
    pub fn ansi() -> Self {
        Self {
            accent: Color::Indexed(4),
            accent_alt: Color::Indexed(5),
            ok: Color::Indexed(2),
            warn: Color::Indexed(3),
            err: Color::Indexed(1),
            heading: Color::Indexed(15),
            text: Color::Indexed(7),
            muted: Color::Indexed(8),
            code_fg: Color::Indexed(7),
            code_bg: Color::Indexed(0),
            chrome_fg: Color::Indexed(7),
            chrome_bg: Color::Indexed(0),
            dot_active: Color::Indexed(4),
            dot_inactive: Color::Indexed(8),
            card_border: Color::Indexed(8),
        }
    }
}

impl Default for DeckTheme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0x3b, 0x82, 0xf6),
            accent_alt: Color::Rgb(0x8b, 0x5c, 0xf6),
            ok: Color::Rgb(0x10, 0xb9, 0x81),
            warn: Color::Rgb(0xf5, 0x9e, 0x0b),
            err: Color::Rgb(0xef, 0x44, 0x44),
            heading: Color::Rgb(0xf8, 0xfa, 0xfc),
            text: Color::Rgb(0xe2, 0xe8, 0xf0),
            muted: Color::Rgb(0x94, 0xa3, 0xb8),
            code_fg: Color::Rgb(0xe2, 0xe8, 0xf0),
            code_bg: Color::Rgb(0x0f, 0x17, 0x2a),
            chrome_fg: Color::Rgb(0xe2, 0xe8, 0xf0),
            chrome_bg: Color::Rgb(0x1e, 0x29, 0x3b),
            dot_active: Color::Rgb(0x3b, 0x82, 0xf6),
            dot_inactive: Color::Rgb(0x47, 0x55, 0x69),
            card_border: Color::Rgb(0x47, 0x55, 0x69),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_support_variants() {
        assert_eq!(parse_color_support("truecolor"), Some(TerminalColorSupport::TrueColor));
        assert_eq!(parse_color_support(" 256 "), Some(TerminalColorSupport::Ansi256));
        assert_eq!(parse_color_support("BASIC"), Some(TerminalColorSupport::Ansi16));
        assert_eq!(parse_color_support("plaid"), None);
    }

    #[test]
    fn ansi_theme_uses_indexed_colors() {
        let theme = DeckTheme::for_support(TerminalColorSupport::Ansi16);
        assert!(matches!(theme.accent, Color::Indexed(_)));
    }
}
