//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// TranscriptionConfig
// ---------------------------------------------------------------------------

/// Settings for the speech-to-text provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionConfig {
    /// Base URL of the transcription endpoint.
    ///
    /// - OpenAI: `https://api.openai.com`
    /// - Any compatible gateway works; the client appends
    ///   `/v1/audio/transcriptions`.
    pub base_url: String,
    /// API key — `None` for providers that require no authentication.
    pub api_key: Option<String>,
    /// Model identifier sent with the upload (e.g. `"whisper-1"`).
    pub model: String,
    /// Maximum seconds to wait for a transcription response.
    pub timeout_secs: u64,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".into(),
            api_key: None,
            model: "whisper-1".into(),
            timeout_secs: 120,
        }
    }
}

// ---------------------------------------------------------------------------
// ExtractionConfig
// ---------------------------------------------------------------------------

/// Settings for the task-extraction LLM call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Base URL of an OpenAI-compatible chat-completions API.
    ///
    /// - Ollama (OpenAI mode): `http://localhost:11434`
    /// - OpenAI: `https://api.openai.com`
    pub base_url: String,
    /// API key — `None` for local providers.
    pub api_key: Option<String>,
    /// Model identifier sent to the API (e.g. `"gpt-4o"`, `"llama3.3:70b"`).
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).  Lower = more deterministic, which
    /// matters when the response must be machine-parseable JSON.
    pub temperature: f32,
    /// Maximum seconds to wait for a completion before timing out.
    pub timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".into(),
            api_key: None,
            model: "gpt-4o".into(),
            temperature: 0.2,
            timeout_secs: 60,
        }
    }
}

// ---------------------------------------------------------------------------
// BoardConfig
// ---------------------------------------------------------------------------

/// Settings for the task board itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Roster used when no members have been added yet this session.
    pub default_members: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_members: vec![
                "Alice".into(),
                "Bob".into(),
                "Charlie".into(),
                "David".into(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use task_organizer::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Speech-to-text provider settings.
    pub transcription: TranscriptionConfig,
    /// Task-extraction LLM settings.
    pub extraction: ExtractionConfig,
    /// Task board settings.
    pub board: BoardConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.transcription.base_url, loaded.transcription.base_url);
        assert_eq!(original.transcription.api_key, loaded.transcription.api_key);
        assert_eq!(original.transcription.model, loaded.transcription.model);
        assert_eq!(
            original.transcription.timeout_secs,
            loaded.transcription.timeout_secs
        );

        assert_eq!(original.extraction.base_url, loaded.extraction.base_url);
        assert_eq!(original.extraction.model, loaded.extraction.model);
        assert_eq!(original.extraction.temperature, loaded.extraction.temperature);
        assert_eq!(original.extraction.timeout_secs, loaded.extraction.timeout_secs);

        assert_eq!(original.board.default_members, loaded.board.default_members);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        let default = AppConfig::default();

        assert_eq!(config.transcription.model, default.transcription.model);
        assert_eq!(config.extraction.model, default.extraction.model);
        assert_eq!(config.board.default_members, default.board.default_members);
    }

    /// Verify default values.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.transcription.base_url, "https://api.openai.com");
        assert_eq!(cfg.transcription.model, "whisper-1");
        assert!(cfg.transcription.api_key.is_none());
        assert_eq!(cfg.extraction.model, "gpt-4o");
        assert_eq!(cfg.extraction.temperature, 0.2);
        assert_eq!(cfg.board.default_members.len(), 4);
        assert_eq!(cfg.board.default_members[0], "Alice");
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.transcription.base_url = "http://localhost:8080".into();
        cfg.transcription.api_key = Some("sk-test".into());
        cfg.extraction.base_url = "http://localhost:11434".into();
        cfg.extraction.model = "llama3.3:70b".into();
        cfg.extraction.timeout_secs = 30;
        cfg.board.default_members = vec!["Emily".into()];

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.transcription.base_url, "http://localhost:8080");
        assert_eq!(loaded.transcription.api_key, Some("sk-test".into()));
        assert_eq!(loaded.extraction.base_url, "http://localhost:11434");
        assert_eq!(loaded.extraction.model, "llama3.3:70b");
        assert_eq!(loaded.extraction.timeout_secs, 30);
        assert_eq!(loaded.board.default_members, vec!["Emily".to_string()]);
    }
}
