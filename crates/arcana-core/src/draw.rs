//! Drawing cards into spread positions.
//!
//! A draw samples distinct cards uniformly without replacement, flips an
//! independent fair coin per card for orientation, and maps selection order
//! onto the spread's positions. The RNG is caller-supplied so tests can
//! seed it; no reproducibility is promised to production callers.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::deck::{Card, Deck};
use crate::error::{CoreError, CoreResult};
use crate::language::{Language, Localized};
use crate::spread::Spread;

/// Whether a drawn card landed upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// The card's face-up meaning applies.
    Upright,
    /// The card's internalized, blocked, or opposite meaning applies.
    Reversed,
}

impl Orientation {
    /// Label for the given language.
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Upright, Language::English) => "Upright",
            (Self::Upright, Language::Chinese) => "正位",
            (Self::Reversed, Language::English) => "Reversed",
            (Self::Reversed, Language::Chinese) => "逆位",
        }
    }

    /// Flip an unbiased coin.
    fn flip(rng: &mut StdRng) -> Self {
        if rng.random::<bool>() {
            Self::Reversed
        } else {
            Self::Upright
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Language::English))
    }
}

/// The spread position a drawn card occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based index into the spread's position list.
    pub index: usize,
    /// The position's label.
    pub label: Localized,
}

/// One card as it landed in a reading.
#[derive(Debug, Clone)]
pub struct DrawnCard<'a> {
    /// The catalog card, shared, never copied.
    pub card: &'a Card,
    /// Upright or reversed, decided independently per card.
    pub orientation: Orientation,
    /// The position this card occupies.
    pub position: Position,
}

/// Draw one card per spread position from `deck`.
///
/// Fails with [`CoreError::InsufficientDeck`] when the spread asks for more
/// cards than the deck holds. Every card is equally likely regardless of
/// catalog order; within one draw no card appears twice.
pub fn draw<'a>(
    spread: &Spread,
    deck: &'a Deck,
    rng: &mut StdRng,
) -> CoreResult<Vec<DrawnCard<'a>>> {
    let count = spread.count();
    if count > deck.len() {
        return Err(CoreError::InsufficientDeck {
            spread: spread.name.clone(),
            requested: count,
            available: deck.len(),
        });
    }

    let mut indices: Vec<usize> = (0..deck.len()).collect();
    let (picked, _) = indices.partial_shuffle(rng, count);

    let mut drawn = Vec::with_capacity(count);
    for (index, (&card_index, label)) in picked.iter().zip(&spread.positions).enumerate() {
        drawn.push(DrawnCard {
            card: &deck.cards()[card_index],
            orientation: Orientation::flip(rng),
            position: Position {
                index,
                label: label.clone(),
            },
        });
    }
    Ok(drawn)
}
