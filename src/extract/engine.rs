//! Core `TaskExtractor` trait and `ApiExtractor` implementation.
//!
//! `ApiExtractor` calls any OpenAI-compatible `/v1/chat/completions`
//! endpoint — Ollama (OpenAI mode), OpenAI, Groq, LM Studio, vLLM, etc.
//! All connection details come from [`ExtractionConfig`]; nothing is
//! hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ExtractionConfig;
use crate::extract::parse::{parse_extraction, ExtractionResult};
use crate::extract::prompt::PromptBuilder;

// ---------------------------------------------------------------------------
// ExtractError
// ---------------------------------------------------------------------------

/// Errors that can occur during task extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("extraction request timed out")]
    Timeout,

    /// The generation output was not valid JSON of the expected shape.
    ///
    /// This is terminal for the run: the caller must surface it rather than
    /// guess at partial structure.
    #[error("generator output was not valid task JSON: {0}")]
    Parse(String),

    /// The generator returned a response with no usable text content.
    #[error("generator returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for ExtractError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ExtractError::Timeout
        } else {
            ExtractError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// TaskExtractor trait
// ---------------------------------------------------------------------------

/// Async trait for transcript-to-task extraction backends.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn TaskExtractor>`).  Exactly one generation
/// attempt is made per invocation — no retry.
#[async_trait]
pub trait TaskExtractor: Send + Sync {
    async fn extract(&self, transcript: &str) -> Result<ExtractionResult, ExtractError>;
}

// ---------------------------------------------------------------------------
// ApiExtractor
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint and strictly
/// parses the completion into an [`ExtractionResult`].
pub struct ApiExtractor {
    client: reqwest::Client,
    config: ExtractionConfig,
    prompt_builder: PromptBuilder,
}

impl ApiExtractor {
    /// Build an `ApiExtractor` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
            prompt_builder: PromptBuilder::new(),
        }
    }
}

#[async_trait]
impl TaskExtractor for ApiExtractor {
    /// Send `transcript` to the configured endpoint and parse the reply.
    ///
    /// The `Authorization: Bearer …` header is attached **only** when
    /// `config.api_key` is `Some(key)` and `key` is non-empty — safe for
    /// Ollama and other local providers that require no authentication.
    async fn extract(&self, transcript: &str) -> Result<ExtractionResult, ExtractError> {
        let (system_msg, user_msg) = self.prompt_builder.build_chat(transcript);

        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream":      false,
            "temperature": self.config.temperature
        });

        let mut req = self.client.post(&url).json(&body);

        // Attach Authorization header only when api_key is a non-empty string.
        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(ExtractError::EmptyResponse)?
            .trim();

        if content.is_empty() {
            return Err(ExtractError::EmptyResponse);
        }

        parse_extraction(content).map_err(|e| {
            log::warn!("extraction: completion was not parseable task JSON: {e}");
            ExtractError::Parse(e.to_string())
        })
    }
}

// ---------------------------------------------------------------------------
// MockExtractor — test double
// ---------------------------------------------------------------------------

/// Test double that parses a canned completion body, exercising the same
/// strict parsing path as the real extractor but without network I/O.
#[cfg(test)]
pub struct MockExtractor {
    body: String,
}

#[cfg(test)]
impl MockExtractor {
    /// A mock whose "generator" always replies with `body`.
    pub fn replies_with(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl TaskExtractor for MockExtractor {
    async fn extract(&self, _transcript: &str) -> Result<ExtractionResult, ExtractError> {
        parse_extraction(&self.body).map_err(|e| ExtractError::Parse(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
