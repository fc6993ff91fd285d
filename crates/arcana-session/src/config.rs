//! Configuration for sessions and the collaborator client.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Environment variable holding the Groq API credential.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Supported model identifiers, selectable from a small fixed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Model {
    /// `llama-3.1-8b-instant` — the fast default.
    #[default]
    Llama31_8bInstant,
    /// `llama3-70b-8192`.
    Llama3_70b,
    /// `mixtral-8x7b-32768`.
    Mixtral8x7b,
    /// `gemma2-9b-it`.
    Gemma2_9bIt,
}

impl Model {
    /// All supported models, default first.
    pub fn all() -> &'static [Self] {
        &[
            Self::Llama31_8bInstant,
            Self::Llama3_70b,
            Self::Mixtral8x7b,
            Self::Gemma2_9bIt,
        ]
    }

    /// Wire identifier sent to the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Llama31_8bInstant => "llama-3.1-8b-instant",
            Self::Llama3_70b => "llama3-70b-8192",
            Self::Mixtral8x7b => "mixtral-8x7b-32768",
            Self::Gemma2_9bIt => "gemma2-9b-it",
        }
    }

    /// Parse a wire identifier.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.as_str() == s)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sampling and transport parameters for the collaborator call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Model to request completions from.
    pub model: Model,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum completion tokens.
    pub max_tokens: u32,
    /// Deadline for one completion call. On expiry the call fails with a
    /// timeout and the session stays retryable.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.7,
            max_tokens: 2048,
            timeout: Duration::from_secs(60),
        }
    }
}

impl ClientConfig {
    /// Set the model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Configuration for a reading session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Seed the session RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Read the Groq credential from the process environment.
///
/// A missing or blank credential is a configuration error, surfaced before
/// any network attempt.
pub fn api_key_from_env() -> Result<String, ClientError> {
    api_key_from(env::var(API_KEY_VAR).ok())
}

fn api_key_from(value: Option<String>) -> Result<String, ClientError> {
    value
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| ClientError::Configuration(format!("{API_KEY_VAR} is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_fast_llama() {
        assert_eq!(Model::default(), Model::Llama31_8bInstant);
        assert_eq!(Model::default().as_str(), "llama-3.1-8b-instant");
    }

    #[test]
    fn model_parse_roundtrip() {
        for &model in Model::all() {
            assert_eq!(Model::parse(model.as_str()), Some(model));
        }
        assert_eq!(Model::parse("gpt-4"), None);
    }

    #[test]
    fn model_display_matches_wire_id() {
        assert_eq!(Model::Mixtral8x7b.to_string(), "mixtral-8x7b-32768");
    }

    #[test]
    fn default_client_config() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.model, Model::Llama31_8bInstant);
        assert!((cfg.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(cfg.max_tokens, 2048);
        assert_eq!(cfg.timeout, Duration::from_secs(60));
    }

    #[test]
    fn client_config_builders() {
        let cfg = ClientConfig::default()
            .with_model(Model::Gemma2_9bIt)
            .with_temperature(0.2)
            .with_max_tokens(512)
            .with_timeout(Duration::from_secs(10));
        assert_eq!(cfg.model, Model::Gemma2_9bIt);
        assert_eq!(cfg.max_tokens, 512);
        assert_eq!(cfg.timeout, Duration::from_secs(10));
    }

    #[test]
    fn session_config_seed() {
        assert!(SessionConfig::default().seed.is_none());
        assert_eq!(SessionConfig::default().with_seed(7).seed, Some(7));
    }

    #[test]
    fn missing_credential_is_a_configuration_error() {
        assert!(matches!(
            api_key_from(None),
            Err(ClientError::Configuration(_))
        ));
        assert!(matches!(
            api_key_from(Some("   ".to_string())),
            Err(ClientError::Configuration(_))
        ));
        assert_eq!(api_key_from(Some("gsk_test".to_string())).unwrap(), "gsk_test");
    }
}
