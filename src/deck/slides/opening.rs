//! Slides 1-5: title card, introduction, definition, origin, evolution.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::*;
use crate::app::theme::DeckTheme;

pub(super) fn title_card(theme: &DeckTheme) -> Text<'static> {
    let mut lines = vec![
        blank(),
        blank(),
        Line::styled(
            "W E B   S É M A N T I Q U E",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        blank(),
        Line::styled(
            "Définition, Origine, Objectifs et Technologies",
            Style::default().fg(theme.muted),
        )
        .centered(),
        blank(),
        Line::styled("━━━━━━━━━━━━━━━━━━━━", Style::default().fg(theme.accent_alt)).centered(),
        blank(),
        blank(),
        Line::styled("Présenté par", Style::default().fg(theme.muted)).centered(),
        blank(),
    ];

    for name in [
        "Abdellah BOULIDAM",
        "Youness BOUMLIK",
        "Oumaima EL ALAMI",
        "Zakaria EL HOUARI",
        "Imane EL WARRAQI",
    ] {
        lines.push(
            Line::styled(
                name,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )
            .centered(),
        );
    }

    lines.extend([
        blank(),
        blank(),
        Line::from(vec![
            Span::styled("Encadré par ", Style::default().fg(theme.muted)),
            Span::styled(
                "Mme Nidal LAMGHARI",
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .centered(),
    ]);

    Text::from(lines)
}

pub(super) fn introduction(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        lead(
            theme,
            "Le Web sémantique rend les informations compréhensibles par les machines grâce à des métadonnées.",
        ),
        blank(),
        card_title(theme, theme.accent, "Compréhension par la machine"),
        card_text(theme, "Les machines interprètent le sens des données."),
        blank(),
        card_title(theme, theme.accent_alt, "Interconnexion des données"),
        card_text(theme, "Relations sémantiques entre les informations."),
        blank(),
        heading(theme, "Le constat"),
        blank(),
        numbered(theme, 1, "Le Web actuel permet d'accéder à une grande quantité d'informations"),
        numbered(theme, 2, "Les données sont principalement compréhensibles par les humains"),
        numbered(theme, 3, "Les machines ont cependant du mal à comprendre le sens des informations"),
        check(theme, "Le Web sémantique apporte une solution à ce problème"),
    ])
}

pub(super) fn definition(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(
            theme,
            "Comprendre la différence entre le Web classique et le Web sémantique",
        ),
        blank(),
        card_title(theme, theme.accent, "Web classique — Web de Documents"),
        colored_bullet(theme, theme.accent, "Un internet centré sur des sites interactifs et centralisés"),
        colored_bullet(theme, theme.accent, "Liens hypertextes simples"),
        colored_bullet(theme, theme.accent, "Pour les humains uniquement"),
        blank(),
        Line::styled("— VS —", Style::default().fg(theme.warn).add_modifier(Modifier::BOLD))
            .centered(),
        blank(),
        card_title(theme, theme.accent_alt, "Web sémantique — Web de Données"),
        colored_bullet(
            theme,
            theme.accent_alt,
            "Extension du Web où l'information a une signification bien définie",
        ),
        colored_bullet(theme, theme.accent_alt, "Relations sémantiques"),
        colored_bullet(theme, theme.accent_alt, "Exploitable par les machines"),
        blank(),
        heading(theme, "L'idée principale"),
        body(
            theme,
            "Structurer les données de manière intelligente afin que les ordinateurs puissent les interpréter, les relier et les exploiter automatiquement.",
        ),
        body(
            theme,
            "Contrairement au Web traditionnel, le Web sémantique repose sur des standards définis par le W3C.",
        ),
    ])
}

pub(super) fn origin(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        lead(
            theme,
            "Le Web sémantique est une évolution naturelle du Web, proposée par Tim Berners-Lee, inventeur du Web.",
        ),
        blank(),
        card_title(theme, theme.accent, "Web pour les humains"),
        card_text(theme, "Le Web initial était conçu pour les humains."),
        blank(),
        card_title(theme, theme.accent_alt, "Machines limitées"),
        card_text(theme, "Les machines ne faisaient que lire et afficher."),
        blank(),
        card_title(theme, theme.ok, "Nouvel objectif"),
        card_text(theme, "Permettre aux machines de comprendre les données."),
    ])
}

pub(super) fn evolution(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(theme, "De la lecture à la compréhension"),
        blank(),
        card_title(theme, theme.accent, "Web 1.0 — Web statique (1990-2000)"),
        card_text(theme, "Pages HTML, lecture seule."),
        Line::styled("      │", Style::default().fg(theme.muted)),
        card_title(theme, theme.accent_alt, "Web 2.0 — Web social (2000-2010)"),
        card_text(theme, "Interaction, réseaux sociaux."),
        Line::styled("      │", Style::default().fg(theme.muted)),
        card_title(theme, theme.ok, "Web 3.0 — Web sémantique (2010-présent)"),
        card_text(theme, "Données reliées et compréhensibles par les machines."),
    ])
}
