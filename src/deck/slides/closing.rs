//! Slides 10-14: real-world applications, challenges, limits, conclusion,
//! and the rdflib/SPARQL demonstration.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::*;
use crate::app::theme::DeckTheme;

pub(super) fn applications(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(theme, "Où le Web sémantique est-il utilisé aujourd'hui ?"),
        blank(),
        card_title(theme, theme.accent, "Moteurs de recherche (Knowledge Graph)"),
        card_note(theme, "", "Google, Bing"),
        colored_bullet(theme, theme.accent, "Avant : recherche de chaînes de caractères"),
        colored_bullet(theme, theme.accent, "Maintenant : compréhension de l'entité"),
        colored_bullet(theme, theme.accent, "Résultat : rich snippets et encadrés d'informations"),
        blank(),
        card_title(theme, theme.accent_alt, "E-commerce & SEO (Schema.org)"),
        card_note(theme, "", "Amazon, Shopify"),
        colored_bullet(
            theme,
            theme.accent_alt,
            "Balises sémantiques pour décrire les produits",
        ),
        colored_bullet(
            theme,
            theme.accent_alt,
            "Permet aux moteurs de comparer automatiquement les offres",
        ),
        colored_bullet(theme, theme.accent_alt, "Affiche les étoiles dans les résultats"),
        blank(),
        card_title(theme, theme.ok, "Santé & recherche scientifique"),
        card_note(theme, "", "Interopérabilité médicale"),
        colored_bullet(
            theme,
            theme.ok,
            "Faire communiquer des bases de données d'hôpitaux différents",
        ),
        colored_bullet(theme, theme.ok, "Unification des vocabulaires médicaux"),
        colored_bullet(theme, theme.ok, "Aide au diagnostic (ex : SNOMED CT)"),
    ])
}

pub(super) fn challenges(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(theme, "Les obstacles à surmonter"),
        blank(),
        card_title(theme, theme.accent_alt, "Complexité de modélisation"),
        card_text(
            theme,
            "Créer des ontologies riches et cohérentes demande une expertise pointue. La modélisation du monde réel reste complexe et subjective.",
        ),
        blank(),
        card_title(theme, theme.accent, "Adoption et standardisation"),
        card_text(
            theme,
            "Convaincre les organisations d'adopter les standards du W3C. Beaucoup préfèrent des solutions propriétaires plus simples à court terme.",
        ),
        blank(),
        card_title(theme, theme.ok, "Scalabilité des systèmes"),
        card_text(
            theme,
            "Gérer et interroger des milliards de triplets RDF nécessite des infrastructures performantes et coûteuses.",
        ),
        blank(),
        card_title(theme, theme.warn, "Diversité linguistique"),
        card_text(
            theme,
            "Harmoniser les ontologies dans différentes langues et cultures représente un défi majeur pour un Web vraiment global.",
        ),
    ])
}

pub(super) fn limits(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(theme, "Contraintes techniques et pratiques"),
        blank(),
        card_title(theme, theme.err, "Qualité des données"),
        card_text(
            theme,
            "Maintenir la cohérence, la fraîcheur et la véracité des données issues de multiples sources hétérogènes reste problématique.",
        ),
        blank(),
        card_title(theme, theme.warn, "Coût d'implémentation"),
        card_text(
            theme,
            "L'investissement initial (formation, infrastructure, développement) freine l'adoption, surtout pour les PME.",
        ),
        blank(),
        card_title(theme, theme.accent, "Performance des requêtes"),
        card_text(
            theme,
            "Les requêtes SPARQL complexes peuvent être lentes. L'inférence en temps réel sur de grandes bases reste difficile.",
        ),
        blank(),
        card_title(theme, theme.accent_alt, "Interopérabilité partielle"),
        card_text(
            theme,
            "Malgré les standards, des incompatibilités subsistent entre différents outils et implémentations du Web sémantique.",
        ),
    ])
}

pub(super) fn conclusion(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(theme, "L'avenir du Web est sémantique"),
        blank(),
        body(
            theme,
            "Le Web sémantique transforme progressivement notre façon d'organiser et d'exploiter l'information numérique. Malgré ses défis, il ouvre des perspectives révolutionnaires.",
        ),
        blank(),
        body(
            theme,
            "L'intégration croissante avec l'intelligence artificielle promet un Web où les machines ne se contentent pas de stocker des données, mais les comprennent et raisonnent avec elles.",
        ),
        blank(),
        card_title(theme, theme.ok, "Interopérabilité"),
        card_text(theme, "Des données connectées et réutilisables à l'échelle mondiale."),
        card_title(theme, theme.accent_alt, "Innovation"),
        card_text(theme, "Nouvelles applications intelligentes et agents autonomes."),
        card_title(theme, theme.accent, "Vision globale"),
        card_text(theme, "Un Web universel et compréhensible par tous."),
        blank(),
        blank(),
        banner(theme, "Merci de votre attention !"),
        blank(),
        Line::styled(
            "Le Web sémantique n'est pas une utopie,",
            Style::default().fg(theme.text),
        )
        .centered(),
        Line::styled(
            "c'est une réalité en construction.",
            Style::default().fg(theme.text),
        )
        .centered(),
    ])
}

pub(super) fn demo(theme: &DeckTheme) -> Text<'static> {
    Text::from(vec![
        subheading(theme, "Implémentation RDF/SPARQL avec Python"),
        blank(),
        heading(theme, "Installation et configuration"),
        code(theme, "pip install rdflib"),
        code(theme, "from rdflib import Graph, Namespace, RDF, Literal"),
        blank(),
        heading(theme, "Création du graphe RDF"),
        code(theme, "g = Graph()"),
        code(theme, "EX = Namespace(\"http://example.org/\")"),
        code(theme, "g.bind(\"ex\", EX)"),
        code(theme, "etudiant1 = EX.Ahmed"),
        code(theme, "etudiant2 = EX.Sara"),
        code(theme, "module1 = EX.WebSemantique"),
        blank(),
        heading(theme, "Ajout des triplets RDF"),
        triple(theme, "<Ahmed>", "rdf:type", "<Etudiant>"),
        triple(theme, "<Sara>", "rdf:type", "<Etudiant>"),
        triple(theme, "<Ahmed>", "suit", "<WebSemantique>"),
        triple(theme, "<Sara>", "suit", "<WebSemantique>"),
        code(theme, "g.add((etudiant1, RDF.type, EX.Etudiant))"),
        code(theme, "g.add((etudiant1, EX.suit, module1))"),
        blank(),
        heading(theme, "Requête SPARQL"),
        code(theme, "PREFIX ex: <http://example.org/>"),
        code(theme, "SELECT ?etudiant"),
        code(theme, "WHERE { ?etudiant ex:suit ex:WebSemantique . }"),
        blank(),
        body(theme, "  Résultats :"),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("Ahmed  ", Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
            Span::styled("http://example.org/Ahmed", Style::default().fg(theme.muted)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("Sara   ", Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
            Span::styled("http://example.org/Sara", Style::default().fg(theme.muted)),
        ]),
        blank(),
        heading(theme, "Ce que cette démonstration illustre"),
        check(
            theme,
            "Structuration : RDF organise l'information en triplets sujet-prédicat-objet",
        ),
        check(
            theme,
            "Interrogation sémantique : SPARQL interroge le sens, pas juste le texte",
        ),
        check(
            theme,
            "Interopérabilité : le même graphe sert à différentes applications sans perte de sens",
        ),
    ])
}

fn triple(
    theme: &DeckTheme,
    subject: &'static str,
    predicate: &'static str,
    object: &'static str,
) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(subject, Style::default().fg(theme.err)),
        Span::raw(" "),
        Span::styled(predicate, Style::default().fg(theme.ok)),
        Span::raw(" "),
        Span::styled(object, Style::default().fg(theme.accent)),
    ])
}
