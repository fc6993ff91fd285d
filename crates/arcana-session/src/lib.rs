//! Reading session orchestration and the Groq language-model client.
//!
//! Pairs the pure engine from `arcana-core` with the one impure boundary:
//! the outbound chat-completion call. A session holds a single reading at a
//! time and exposes the awaiting-question / spread-drawn / interpreted
//! state machine; the collaborator is a substitutable trait so everything
//! except the network call is deterministically testable.

pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use client::{GroqClient, Oracle};
pub use config::{API_KEY_VAR, ClientConfig, Model, SessionConfig, api_key_from_env};
pub use error::{ClientError, SessionError, SessionResult};
pub use session::{ReadingSession, SessionState};
