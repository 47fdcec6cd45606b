//! The slide registry: a fixed, ordered deck built once at startup.

use ratatui::text::Text;

use crate::app::theme::DeckTheme;

pub mod slides;

/// Number of slides in the lecture deck.
pub const SLIDE_COUNT: usize = 14;

type SlideBody = fn(&DeckTheme) -> Text<'static>;

/// One static content panel. The body is rebuilt per draw; slide content is
/// plain styled text, so there is nothing worth caching.
pub struct Slide {
    pub number: usize,
    pub section: Option<&'static str>,
    pub title: &'static str,
    body: SlideBody,
}

impl Slide {
    pub fn body(&self, theme: &DeckTheme) -> Text<'static> {
        (self.body)(theme)
    }
}

pub struct Deck {
    title: &'static str,
    slides: Vec<Slide>,
}

impl Deck {
    /// The "Web Sémantique" lecture.
    pub fn semantic_web() -> Self {
        let slides = slides::all();
        debug_assert_eq!(slides.len(), SLIDE_COUNT);
        Self {
            title: "Web Sémantique",
            slides,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at 1-based position `number`. A defensive out-of-range lookup
    /// falls back to the first slide rather than panicking mid-draw.
    pub fn get(&self, number: usize) -> &Slide {
        self.slides
            .get(number.wrapping_sub(1))
            .unwrap_or(&self.slides[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_fourteen_slides_in_order() {
        let deck = Deck::semantic_web();
        assert_eq!(deck.len(), SLIDE_COUNT);
        for (idx, slide) in deck.iter().enumerate() {
            assert_eq!(slide.number, idx + 1);
        }
    }

    #[test]
    fn get_falls_back_to_first_slide_out_of_range() {
        let deck = Deck::semantic_web();
        assert_eq!(deck.get(0).number, 1);
        assert_eq!(deck.get(99).number, 1);
        assert_eq!(deck.get(14).number, 14);
    }

    #[test]
    fn every_slide_renders_a_nonempty_body() {
        let deck = Deck::semantic_web();
        let theme = DeckTheme::default();
        for slide in deck.iter() {
            let body = slide.body(&theme);
            assert!(!body.lines.is_empty(), "slide {} is empty", slide.number);
            assert!(!slide.title.is_empty());
        }
    }

    #[test]
    fn expected_titles_present() {
        let deck = Deck::semantic_web();
        assert_eq!(deck.get(1).title, "Web Sémantique");
        assert_eq!(deck.get(3).title, "Définition et comparaison");
        assert_eq!(deck.get(9).title, "Technologies : la pile sémantique");
        assert_eq!(deck.get(13).title, "Conclusion");
    }
}
