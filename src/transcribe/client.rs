//! Core `Transcriber` trait and `ApiTranscriber` implementation.
//!
//! `ApiTranscriber` calls any OpenAI-style `/v1/audio/transcriptions`
//! endpoint.  All connection details come from [`TranscriptionConfig`];
//! nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::TranscriptionConfig;

// ---------------------------------------------------------------------------
// TranscribeError
// ---------------------------------------------------------------------------

/// Errors that can occur while transcribing audio.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("transcription request timed out")]
    Timeout,

    /// The provider rejected or errored on the audio payload.
    ///
    /// `message` is the provider's own error text, surfaced verbatim so the
    /// caller can display it.
    #[error("provider rejected the audio (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    /// The HTTP response could not be parsed as the expected JSON shape.
    #[error("failed to parse transcription response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for TranscribeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranscribeError::Timeout
        } else {
            TranscribeError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Transcriber trait
// ---------------------------------------------------------------------------

/// Async trait for speech-to-text backends.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn Transcriber>`).
///
/// # Arguments
/// * `audio`     – Raw audio payload bytes, passed through unchanged.  No
///                 client-side size validation is performed; oversized
///                 payloads surface as a provider error.
/// * `mime_hint` – MIME type of the payload (e.g. `"audio/webm"`,
///                 `"audio/mpeg"`), forwarded to the provider.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8], mime_hint: &str) -> Result<String, TranscribeError>;
}

// ---------------------------------------------------------------------------
// ApiTranscriber
// ---------------------------------------------------------------------------

/// Calls an OpenAI-style `/v1/audio/transcriptions` endpoint.
///
/// The audio bytes are wrapped in a multipart request with a `file` part
/// (carrying the MIME hint) and a `model` field.  A single failed call
/// surfaces immediately to the caller — no retry, no local caching of audio.
pub struct ApiTranscriber {
    client: reqwest::Client,
    config: TranscriptionConfig,
}

impl ApiTranscriber {
    /// Build an `ApiTranscriber` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &TranscriptionConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Pull a human-readable message out of a provider error body.
    ///
    /// OpenAI-style errors look like `{"error": {"message": "…"}}`; anything
    /// else is returned as the raw body text.
    fn provider_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| body.trim().to_string())
    }
}

#[async_trait]
impl Transcriber for ApiTranscriber {
    /// Upload `audio` to the configured transcription endpoint.
    ///
    /// The `Authorization: Bearer …` header is attached **only** when
    /// `config.api_key` is `Some(key)` and `key` is non-empty — safe for
    /// local gateways that require no authentication.
    async fn transcribe(&self, audio: &[u8], mime_hint: &str) -> Result<String, TranscribeError> {
        let url = format!("{}/v1/audio/transcriptions", self.config.base_url);

        let file_part = reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name("audio")
            .mime_str(mime_hint)
            .map_err(|e| TranscribeError::Request(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone());

        let mut req = self.client.post(&url).multipart(form);

        // Attach Authorization header only when api_key is a non-empty string.
        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::provider_message(&body);
            log::error!("transcription provider error (HTTP {status}): {message}");
            return Err(TranscribeError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranscribeError::Parse(e.to_string()))?;

        let text = json["text"]
            .as_str()
            .ok_or_else(|| TranscribeError::Parse("response has no `text` field".into()))?
            .to_string();

        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// MockTranscriber — test double
// ---------------------------------------------------------------------------

/// Test double that returns a pre-configured response without any network I/O.
#[cfg(test)]
pub struct MockTranscriber {
    response: Result<String, TranscribeError>,
}

#[cfg(test)]
impl MockTranscriber {
    /// A mock that always succeeds with `text`.
    pub fn ok(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
        }
    }

    /// A mock that always fails with a provider error.
    pub fn provider_error(status: u16, message: &str) -> Self {
        Self {
            response: Err(TranscribeError::Provider {
                status,
                message: message.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _audio: &[u8], _mime: &str) -> Result<String, TranscribeError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(TranscribeError::Provider { status, message }) => Err(TranscribeError::Provider {
                status: *status,
                message: message.clone(),
            }),
            Err(TranscribeError::Timeout) => Err(TranscribeError::Timeout),
            Err(TranscribeError::Request(m)) => Err(TranscribeError::Request(m.clone())),
            Err(TranscribeError::Parse(m)) => Err(TranscribeError::Parse(m.clone())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(api_key: Option<&str>) -> TranscriptionConfig {
        TranscriptionConfig {
            base_url: "https://api.openai.com".into(),
            api_key: api_key.map(|s| s.to_string()),
            model: "whisper-1".into(),
            timeout_secs: 120,
        }
    }

    #[test]
    fn from_config_builds_without_panic() {
        let config = make_config(None);
        let _client = ApiTranscriber::from_config(&config);
    }

    #[test]
    fn from_config_accepts_empty_api_key() {
        let config = make_config(Some(""));
        let _client = ApiTranscriber::from_config(&config);
    }

    /// Verify that `ApiTranscriber` is object-safe (usable as `dyn Transcriber`).
    #[test]
    fn transcriber_is_object_safe() {
        let config = make_config(None);
        let client: Box<dyn Transcriber> = Box::new(ApiTranscriber::from_config(&config));
        drop(client);
    }

    #[test]
    fn provider_message_extracts_openai_error_shape() {
        let body = r#"{"error":{"message":"Invalid file format.","type":"invalid_request_error"}}"#;
        assert_eq!(ApiTranscriber::provider_message(body), "Invalid file format.");
    }

    #[test]
    fn provider_message_falls_back_to_raw_body() {
        assert_eq!(
            ApiTranscriber::provider_message("upstream gateway timeout\n"),
            "upstream gateway timeout"
        );
    }

    #[tokio::test]
    async fn mock_success_passes_text_through() {
        let mock = MockTranscriber::ok("Let's assign tasks for the launch.");
        let text = mock.transcribe(&[0u8; 4], "audio/webm").await.unwrap();
        assert_eq!(text, "Let's assign tasks for the launch.");
    }

    #[tokio::test]
    async fn mock_provider_error_surfaces_status_and_message() {
        let mock = MockTranscriber::provider_error(400, "No audio file provided");
        let err = mock.transcribe(&[], "audio/webm").await.unwrap_err();
        match err {
            TranscribeError::Provider { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "No audio file provided");
            }
            other => panic!("expected Provider error, got {other:?}"),
        }
    }
}
