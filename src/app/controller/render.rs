//! Chrome and slide rendering. In fullscreen the chrome is dropped and the
//! slide takes the whole frame; hotspots for the mouse are re-recorded on
//! every draw so hit testing always matches what is on screen.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::Controller;
use crate::app::theme::DeckTheme;
use crate::core::keymap::NavCommand;

const MAX_CONTENT_WIDTH: u16 = 100;

impl Controller {
    pub fn render(&mut self, frame: &mut Frame, theme: &DeckTheme) {
        self.hotspots.clear();
        let area = frame.area();

        if self.nav.is_fullscreen() {
            self.render_body(frame, theme, area);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        self.render_header(frame, theme, chunks[0]);
        self.render_body(frame, theme, chunks[1]);
        self.render_footer(frame, theme, chunks[2]);
    }

    fn render_header(&mut self, frame: &mut Frame, theme: &DeckTheme, area: Rect) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.chrome_bg)),
            area,
        );

        let chunks = Layout::horizontal([
            Constraint::Length(5),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(area);

        let button = |label: &'static str, enabled: bool| {
            Paragraph::new(Line::styled(
                label,
                if enabled {
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.chrome_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.muted).bg(theme.chrome_bg)
                },
            ))
        };

        frame.render_widget(button("  ‹  ", !self.nav.at_first()), chunks[0]);
        self.record_hotspot(chunks[0], NavCommand::Previous);

        let counter = Line::from(vec![
            Span::styled(
                format!("{:>2}", self.nav.current()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" / {}", self.nav.len()), Style::default().fg(theme.muted)),
        ]);
        frame.render_widget(
            Paragraph::new(counter).style(Style::default().bg(theme.chrome_bg)),
            chunks[1],
        );

        frame.render_widget(button("  ›  ", !self.nav.at_last()), chunks[2]);
        self.record_hotspot(chunks[2], NavCommand::Next);

        let slide = self.deck.get(self.nav.current());
        let mut title = self.deck.title().to_string();
        if let Some(section) = slide.section {
            title.push_str("  —  ");
            title.push_str(section);
        }
        frame.render_widget(
            Paragraph::new(Line::styled(
                title,
                Style::default().fg(theme.chrome_fg).bg(theme.chrome_bg),
            ))
            .alignment(Alignment::Right),
            chunks[3],
        );

        frame.render_widget(button("  ⛶  ", true), chunks[4]);
        self.record_hotspot(chunks[4], NavCommand::ToggleFullscreen);
    }

    fn render_body(&mut self, frame: &mut Frame, theme: &DeckTheme, area: Rect) {
        let slide = self.deck.get(self.nav.current());

        let width = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
        if width == 0 || area.height < 2 {
            return;
        }
        let column = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + 1,
            width,
            height: area.height.saturating_sub(1),
        };

        let mut lines: Vec<Line<'static>> = Vec::new();
        lines.push(Line::styled(
            slide.title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            "─".repeat(width as usize),
            Style::default().fg(theme.card_border),
        ));
        lines.push(Line::default());
        lines.extend(slide.body(theme).lines);

        // Clamp the scroll window against the wrapped height, so scrolling
        // past the end of a short slide is impossible.
        let wrapped_rows: usize = lines
            .iter()
            .map(|line| {
                let w = line.width();
                if w == 0 {
                    1
                } else {
                    w.div_ceil(width as usize)
                }
            })
            .sum();
        self.max_scroll = wrapped_rows.saturating_sub(column.height as usize) as u16;
        self.scroll = self.scroll.min(self.max_scroll);

        frame.render_widget(
            Paragraph::new(Text::from(lines))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            column,
        );
    }

    fn render_footer(&mut self, frame: &mut Frame, theme: &DeckTheme, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        // Progress dots, one clickable cell per slide.
        let count = self.nav.len() as u16;
        let strip_width = count * 2 - 1;
        if strip_width <= rows[0].width {
            let start_x = rows[0].x + (rows[0].width - strip_width) / 2;
            let mut spans = Vec::with_capacity(count as usize * 2);
            for i in 0..count {
                let number = i as usize + 1;
                let active = number == self.nav.current();
                spans.push(Span::styled(
                    if active { "●" } else { "○" },
                    Style::default().fg(if active {
                        theme.dot_active
                    } else {
                        theme.dot_inactive
                    }),
                ));
                if i + 1 < count {
                    spans.push(Span::raw(" "));
                }
                self.record_hotspot(
                    Rect {
                        x: start_x + i * 2,
                        y: rows[0].y,
                        width: 1,
                        height: 1,
                    },
                    NavCommand::GoTo(number),
                );
            }
            let strip = Rect {
                x: start_x,
                y: rows[0].y,
                width: strip_width,
                height: 1,
            };
            frame.render_widget(Paragraph::new(Line::from(spans)), strip);
        }

        frame.render_widget(
            Paragraph::new(
                Line::styled(
                    "← → naviguer · espace suivant · 1-9 aller à · ctrl+f plein écran · q quitter",
                    Style::default().fg(theme.muted),
                )
                .centered(),
            ),
            rows[1],
        );
    }
}
