//! Error types for the reading engine.

use thiserror::Error;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced by the draw engine and prompt builder.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A spread asks for more cards than the catalog holds.
    #[error("spread \"{spread}\" needs {requested} cards but the deck holds {available}")]
    InsufficientDeck {
        /// Name of the offending spread.
        spread: String,
        /// Cards the spread requires.
        requested: usize,
        /// Cards available in the deck.
        available: usize,
    },

    /// A malformed reading reached the prompt builder. This is a caller
    /// construction bug, not a user-recoverable condition.
    #[error("invalid reading: {0}")]
    InvalidReading(String),
}
