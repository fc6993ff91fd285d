//! The language-model collaborator seam and its Groq-backed client.
//!
//! The session treats the language model as a black box: one request, one
//! text completion or an error. [`Oracle`] is the substitutable seam so the
//! state machine can be exercised with deterministic fakes; [`GroqClient`]
//! is the production implementation speaking the OpenAI-compatible
//! chat-completions protocol.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use arcana_core::Prompt;

use crate::config::{ClientConfig, api_key_from_env};
use crate::error::ClientError;

const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// A collaborator that turns a prompt pair into one text completion.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Request a single completion.
    async fn complete(&self, prompt: &Prompt) -> Result<String, ClientError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Groq-backed [`Oracle`] implementation.
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    config: ClientConfig,
}

impl GroqClient {
    /// Build a client with an explicit credential.
    pub fn new(api_key: String, config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Http)?;
        Ok(Self {
            http,
            api_key,
            config,
        })
    }

    /// Build a client from the `GROQ_API_KEY` environment credential.
    ///
    /// Fails with [`ClientError::Configuration`] when the credential is
    /// missing, before any request is attempted.
    pub fn from_env(config: ClientConfig) -> Result<Self, ClientError> {
        Self::new(api_key_from_env()?, config)
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn chat_request<'a>(&'a self, prompt: &'a Prompt) -> ChatRequest<'a> {
        ChatRequest {
            model: self.config.model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl Oracle for GroqClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String, ClientError> {
        let response = self
            .http
            .post(GROQ_URL)
            .bearer_auth(&self.api_key)
            .json(&self.chat_request(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout
                } else {
                    ClientError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ClientError::MalformedResponse("no choices in response".to_string()))
    }
}
