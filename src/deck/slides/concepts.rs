//! Slides 6-9: motivations, key concepts, the film-search example, and the
//! W3C layer stack.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::*;
use crate::app::theme::DeckTheme;

pub(super) fn motivations(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(theme, "Limites du Web actuel et objectifs du Web sémantique"),
        blank(),
        Line::styled(
            "⚠ Problèmes du Web actuel",
            Style::default().fg(theme.err).add_modifier(Modifier::BOLD),
        ),
        blank(),
        card_title(theme, theme.err, "Recherche limitée"),
        card_text(theme, "Recherche basée uniquement sur des mots-clés."),
        card_title(theme, theme.warn, "Ambiguïté"),
        card_text(theme, "Ambiguïté du sens des informations."),
        card_title(theme, theme.accent_alt, "Incompréhension machine"),
        card_text(theme, "Les machines ne comprennent pas la signification des données."),
        blank(),
        Line::styled(
            "✓ Objectifs du Web sémantique",
            Style::default().fg(theme.ok).add_modifier(Modifier::BOLD),
        ),
        blank(),
        card_title(theme, theme.accent, "Données liées"),
        card_text(theme, "Créer des relations logiques entre les données."),
        card_title(theme, theme.accent_alt, "Compréhension machine"),
        card_text(theme, "Permettre aux machines d'interpréter le sens."),
        card_title(theme, theme.ok, "Automatisation intelligente"),
        card_text(theme, "Faciliter les décisions et traitements automatiques."),
    ])
}

pub(super) fn key_concepts(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        heading(theme, "Le principe fondamental"),
        body(
            theme,
            "Le Web sémantique permet aux machines de comprendre et exploiter le sens des données en ajoutant des métadonnées et des relations sémantiques.",
        ),
        blank(),
        card_title(theme, theme.accent, "Rôle des métadonnées"),
        card_text(
            theme,
            "Ajoutent du sens aux données en décrivant leur structure, leur contenu et leur contexte.",
        ),
        card_note(theme, "Exemple : ", "Dublin Core, Schema.org, RDF"),
        blank(),
        card_title(theme, theme.accent_alt, "Relations sémantiques"),
        card_text(
            theme,
            "Créent des liens significatifs entre les entités, permettant l'inférence et le raisonnement.",
        ),
        card_note(theme, "Exemple : ", "\"estParentDe\", \"travaillePour\", \"localiséÀ\""),
        blank(),
        card_title(theme, theme.ok, "Graphes de connaissances"),
        card_text(
            theme,
            "Représentent les connaissances sous forme de réseaux interconnectés de nœuds et de relations.",
        ),
        card_note(theme, "Exemple : ", "Google Knowledge Graph, Wikidata"),
        blank(),
        card_title(theme, theme.warn, "Raisonnement machine"),
        card_text(
            theme,
            "Permet aux systèmes de déduire de nouvelles informations à partir des données existantes.",
        ),
        card_note(theme, "Exemple : ", "Inférence OWL, moteurs de règles"),
    ])
}

pub(super) fn film_search(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(theme, "Applications pratiques du Web sémantique"),
        blank(),
        Line::styled(
            "💡 Recherche intelligente dans le cinéma",
            Style::default().fg(theme.warn).add_modifier(Modifier::BOLD),
        ),
        note(
            theme,
            "Comment le Web sémantique transforme une recherche simple en résultats riches et contextuels.",
        ),
        blank(),
        numbered(theme, 1, "Recherche intelligente"),
        card_text(
            theme,
            "Une recherche qui comprend le contexte et fournit des résultats structurés.",
        ),
        blank(),
        body(theme, "  Recherche traditionnelle :"),
        code(theme, "\"films Christopher Nolan Inception\""),
        Line::styled("        ↓ Web sémantique", Style::default().fg(theme.accent)),
        body(theme, "  Résultat enrichi :"),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("Film : ", Style::default().fg(theme.accent)),
            Span::styled("Inception (2010)", Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("Réalisateur : ", Style::default().fg(theme.accent)),
            Span::styled("Christopher Nolan", Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("Acteurs : ", Style::default().fg(theme.accent)),
            Span::styled(
                "Leonardo DiCaprio, Joseph Gordon-Levitt",
                Style::default().fg(theme.text),
            ),
        ]),
        blank(),
        numbered(theme, 2, "Compréhension des relations"),
        card_text(
            theme,
            "Les graphes de connaissances relient réalisateurs, films, dates et acteurs.",
        ),
        blank(),
        numbered(theme, 3, "Raisonnement machine"),
        card_text(
            theme,
            "Les machines raisonnent sur les données plutôt que sur la correspondance textuelle.",
        ),
    ])
}

pub(super) fn layer_stack(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(theme, "Architecture en couches (W3C)"),
        blank(),
        card_title(theme, theme.ok, "Couche d'interrogation & ontologie"),
        colored_bullet(
            theme,
            theme.ok,
            "OWL (Ontology Web Language) : description poussée de la sémantique et des règles",
        ),
        colored_bullet(
            theme,
            theme.ok,
            "SPARQL : langage pour exécuter des requêtes précises dans les données",
        ),
        blank(),
        card_title(theme, theme.err, "RDF Schema (RDFS)"),
        card_text(
            theme,
            "Rôle : décrire la signification de la donnée. Permet de créer des vocabulaires légers.",
        ),
        blank(),
        card_title(theme, theme.warn, "RDF & URI"),
        colored_bullet(
            theme,
            theme.warn,
            "RDF (Resource Description Framework) : standard d'échange pour décrire la donnée",
        ),
        colored_bullet(
            theme,
            theme.warn,
            "URI (identifiant) : base fondamentale pour coder et identifier chaque ressource",
        ),
        blank(),
        code(theme, "<Film> <aPourRéalisateur> <Nolan>"),
    ])
}
