//! Error types for reading sessions and the collaborator client.

use thiserror::Error;

use arcana_core::CoreError;

/// Alias for `Result<T, SessionError>`.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors from the language-model client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required credential is missing. Detected before any network
    /// attempt; never retried automatically.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The collaborator did not answer within the configured deadline.
    #[error("the language model did not respond in time")]
    Timeout,

    /// Transport-level failure reaching the collaborator.
    #[error("request failed: {0}")]
    Http(reqwest::Error),

    /// The collaborator answered with a non-success status.
    #[error("api error {status}: {message}")]
    Api {
        /// HTTP status code returned.
        status: u16,
        /// Response body, or empty if unreadable.
        message: String,
    },

    /// The collaborator's response could not be interpreted.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors that can occur while driving a reading session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A reading cannot begin without a question.
    #[error("a non-empty question is required to begin a reading")]
    EmptyQuestion,

    /// A reading is already in progress; reset before starting another.
    #[error("a reading is already in progress")]
    ReadingInProgress,

    /// No drawn reading to operate on.
    #[error("no reading has been drawn")]
    NoReading,

    /// The current reading already has an interpretation; reset to start
    /// over.
    #[error("the reading is already interpreted")]
    AlreadyInterpreted,

    /// Engine-level failure from the deck, draw engine, or prompt builder.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// The language-model call failed. The drawn reading is preserved and
    /// the call may be retried.
    #[error("{0}")]
    Oracle(#[from] ClientError),
}
