use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::api::client::DEFAULT_API_URL;
use crate::assessment::grok::{DEFAULT_GROK_API_URL, DEFAULT_GROK_MODEL};

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars only. The .env file is loaded automatically
/// at startup via dotenvy.
pub struct Config {
    /// Scoring backend base URL (VIRALITY_API_URL, default http://localhost:8000)
    pub api_url: String,
    /// xAI API key, only needed for the AI assessment
    pub grok_api_key: String,
    /// OpenAI-compatible endpoint for the assessment model
    pub grok_api_url: String,
    pub grok_model: String,
    /// Where local state (the disclaimer flag) is kept
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the Grok API key, which is checked
    /// separately by `require_ai` so the rest of the CLI works without it.
    pub fn load() -> Result<Self> {
        let data_dir = env::var("VIRALITY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Ok(Self {
            api_url: env::var("VIRALITY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            grok_api_key: env::var("GROK_API_KEY").unwrap_or_default(),
            grok_api_url: env::var("GROK_API_URL")
                .unwrap_or_else(|_| DEFAULT_GROK_API_URL.to_string()),
            grok_model: env::var("GROK_MODEL").unwrap_or_else(|_| DEFAULT_GROK_MODEL.to_string()),
            data_dir,
        })
    }

    /// Check that the AI assessment is configured.
    /// Call this before building a GrokProvider.
    pub fn require_ai(&self) -> Result<()> {
        if self.grok_api_key.is_empty() {
            anyhow::bail!(
                "GROK_API_KEY not set. Add it to your .env file to enable the AI assessment.\n\
                 See .env.example for the available variables."
            );
        }
        Ok(())
    }

    /// Path of the persisted disclaimer flag.
    pub fn disclaimer_path(&self) -> PathBuf {
        self.data_dir.join("disclaimer.json")
    }
}

/// Platform data directory: ~/.local/share/virality/ on Linux.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("virality")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> Config {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            grok_api_key: key.to_string(),
            grok_api_url: DEFAULT_GROK_API_URL.to_string(),
            grok_model: DEFAULT_GROK_MODEL.to_string(),
            data_dir: PathBuf::from("/tmp/virality-test"),
        }
    }

    #[test]
    fn require_ai_rejects_empty_key() {
        let err = config_with_key("").require_ai().unwrap_err();
        assert!(err.to_string().contains("GROK_API_KEY"));
    }

    #[test]
    fn require_ai_accepts_key() {
        assert!(config_with_key("xai-123").require_ai().is_ok());
    }

    #[test]
    fn disclaimer_lives_in_data_dir() {
        assert_eq!(
            config_with_key("").disclaimer_path(),
            PathBuf::from("/tmp/virality-test/disclaimer.json")
        );
    }
}
