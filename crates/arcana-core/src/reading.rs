//! A single reading: question, drawn spread, interpretation.

use crate::draw::DrawnCard;
use crate::spread::Spread;
use crate::style::Style;

/// One complete user interaction with the cards.
///
/// The reading exclusively owns its drawn-card sequence and interpretation
/// text. Cards, spread, and style are shared immutable catalog data, only
/// borrowed here. A reading is discarded on session reset, never persisted.
#[derive(Debug, Clone)]
pub struct Reading<'a> {
    /// The question put to the cards, verbatim.
    pub question: String,
    /// The layout the cards were drawn into.
    pub spread: &'a Spread,
    /// Drawn cards in spread-position order; length equals the spread's
    /// position count.
    pub cards: Vec<DrawnCard<'a>>,
    /// The interpretive voice for the language-model request.
    pub style: &'a Style,
    /// Text returned by the language model, once an interpretation has
    /// been requested successfully.
    pub interpretation: Option<String>,
}

impl<'a> Reading<'a> {
    /// Create a reading with no interpretation yet.
    pub fn new(
        question: &str,
        spread: &'a Spread,
        cards: Vec<DrawnCard<'a>>,
        style: &'a Style,
    ) -> Self {
        Self {
            question: question.to_string(),
            spread,
            cards,
            style,
            interpretation: None,
        }
    }
}
