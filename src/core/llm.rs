//! Language Model Integration
//!
//! Chat-completions client for gloss generation and tutoring. Speaks the
//! OpenAI-compatible protocol, so it works against Groq as well as a local
//! Ollama `/v1` endpoint. The service is unreliable by contract: every
//! caller keeps a deterministic fallback.

use crate::config::Config;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::RetryIf;
use tracing::{debug, warn};

/// Ceiling for any single wait between attempts
const MAX_BACKOFF: Duration = Duration::from_secs(2);

/// Failure at the language model boundary
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("language model disabled")]
    Disabled,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("empty response")]
    Empty,
}

impl LlmError {
    /// Worth retrying: timeouts, connection drops, rate limits, 5xx
    pub fn is_transient(&self) -> bool {
        match self {
            LlmError::Http(e) => e.is_timeout() || e.is_connect(),
            LlmError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// One system + user exchange
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Text-to-text completion service
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat completions client
#[derive(Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
    retries: usize,
    enabled: bool,
}

impl ChatClient {
    /// Create client from config; the API key is read from the configured env var
    pub fn new(config: &Config) -> Self {
        let api_key = std::env::var(&config.llm_api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self {
            client: reqwest::Client::new(),
            url: config.llm_url.trim_end_matches('/').to_string(),
            model: config.llm_model.clone(),
            api_key,
            timeout: Duration::from_secs(config.llm_timeout_secs),
            retries: config.llm_retries,
            enabled: config.llm_enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Health check - verify the endpoint answers
    pub async fn health_check(&self) -> bool {
        if !self.enabled {
            return false;
        }

        let mut request = self
            .client
            .get(format!("{}/models", self.url))
            .timeout(Duration::from_secs(2));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        match request.send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn send(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let mut builder = self
            .client
            .post(format!("{}/chat/completions", self.url))
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [
                    { "role": "system", "content": request.system },
                    { "role": "user", "content": request.prompt },
                ],
                "temperature": request.temperature,
                "max_tokens": request.max_tokens,
            }))
            .timeout(self.timeout);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("❌ Language model API error ({}): {}", status, body);
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("🧠 Language model raw body: {}", body);

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Malformed(e.to_string()))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        let content = content.trim();
        if content.is_empty() {
            return Err(LlmError::Empty);
        }
        Ok(content.to_string())
    }
}

#[async_trait]
impl CompletionService for ChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        if !self.enabled {
            return Err(LlmError::Disabled);
        }
        let strategy = backoff(self.retries).map(jitter);
        RetryIf::start(strategy, || self.send(request), LlmError::is_transient).await
    }
}

/// 200ms, 400ms, 800ms, ... capped at [`MAX_BACKOFF`]
fn backoff(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(MAX_BACKOFF)
        .take(retries)
}

/// Slice from the first `{` to the last `}` (models often wrap JSON in prose)
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}
