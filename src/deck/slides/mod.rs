//! The fourteen slide bodies, grouped by the arc of the lecture.
//!
//! Builders are small helpers shared by the content modules so every slide
//! sticks to the same visual vocabulary: headings in the accent color,
//! bullets, numbered steps, code blocks on a dark background, muted notes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::theme::DeckTheme;
use crate::deck::Slide;

mod closing;
mod concepts;
mod opening;

pub(super) fn all() -> Vec<Slide> {
    vec![
        slide(1, None, "Web Sémantique", opening::title_card),
        slide(2, Some("1. Introduction"), "Introduction générale", opening::introduction),
        slide(
            3,
            Some("2. Définition"),
            "Définition et comparaison",
            opening::definition,
        ),
        slide(4, Some("3. Origine"), "Origine du Web sémantique", opening::origin),
        slide(5, Some("4. Évolution"), "Évolution du Web", opening::evolution),
        slide(
            6,
            Some("5. Motivations"),
            "Pourquoi le Web sémantique ?",
            concepts::motivations,
        ),
        slide(
            7,
            Some("6. Concepts"),
            "Principes et concepts clés",
            concepts::key_concepts,
        ),
        slide(8, Some("7. Exemples"), "Exemples concrets", concepts::film_search),
        slide(
            9,
            Some("8. Technologies"),
            "Technologies : la pile sémantique",
            concepts::layer_stack,
        ),
        slide(
            10,
            Some("9. Applications"),
            "Applications concrètes",
            closing::applications,
        ),
        slide(11, Some("10. Défis"), "Les défis du Web sémantique", closing::challenges),
        slide(12, Some("11. Limites"), "Les limites actuelles", closing::limits),
        slide(13, Some("12. Conclusion"), "Conclusion", closing::conclusion),
        slide(
            14,
            Some("13. Démonstration"),
            "Démonstration pratique",
            closing::demo,
        ),
    ]
}

fn slide(
    number: usize,
    section: Option<&'static str>,
    title: &'static str,
    body: fn(&DeckTheme) -> ratatui::text::Text<'static>,
) -> Slide {
    Slide {
        number,
        section,
        title,
        body,
    }
}

// Shared builders.

pub(crate) fn blank() -> Line<'static> {
    Line::default()
}

pub(crate) fn heading(theme: &DeckTheme, text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )
}

pub(crate) fn subheading(theme: &DeckTheme, text: &'static str) -> Line<'static> {
    Line::styled(text, Style::default().fg(theme.muted))
}

pub(crate) fn lead(theme: &DeckTheme, text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    )
}

pub(crate) fn body(theme: &DeckTheme, text: &'static str) -> Line<'static> {
    Line::styled(text, Style::default().fg(theme.text))
}

pub(crate) fn colored_bullet(
    theme: &DeckTheme,
    color: Color,
    text: &'static str,
) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(color)),
        Span::styled(text, Style::default().fg(theme.text)),
    ])
}

pub(crate) fn numbered(theme: &DeckTheme, n: usize, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {n}. "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(theme.text)),
    ])
}

pub(crate) fn check(theme: &DeckTheme, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "  ✓ ",
            Style::default().fg(theme.ok).add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(theme.ok)),
    ])
}

pub(crate) fn card_title(_theme: &DeckTheme, color: Color, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

pub(crate) fn card_text(theme: &DeckTheme, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(text, Style::default().fg(theme.text)),
    ])
}

pub(crate) fn card_note(theme: &DeckTheme, label: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(
            label,
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ),
        Span::styled(
            text,
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ),
    ])
}

pub(crate) fn code(theme: &DeckTheme, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(
            format!(" {text} "),
            Style::default().fg(theme.code_fg).bg(theme.code_bg),
        ),
    ])
}

pub(crate) fn note(theme: &DeckTheme, text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::ITALIC),
    )
}

pub(crate) fn banner(theme: &DeckTheme, text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD),
    )
    .centered()
}
