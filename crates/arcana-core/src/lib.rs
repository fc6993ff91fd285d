//! Core tarot reading engine.
//!
//! Provides the fixed 78-card catalog, named positional spreads,
//! interpretation personas, the draw engine (uniform sampling without
//! replacement with independent orientation flips), and prompt assembly for
//! a language-model collaborator. Everything here is pure decision logic;
//! the network boundary lives in the session crate.

pub mod assets;
pub mod deck;
pub mod draw;
pub mod error;
pub mod language;
pub mod prompt;
pub mod reading;
pub mod spread;
pub mod style;

pub use assets::{CARD_BACK_ASSET, ImageDir, ImageSource, NoImages};
pub use deck::{Card, Deck, Suit};
pub use draw::{DrawnCard, Orientation, Position, draw};
pub use error::{CoreError, CoreResult};
pub use language::{Language, Localized};
pub use prompt::{Prompt, build_prompt};
pub use reading::Reading;
pub use spread::Spread;
pub use style::Style;
