// Disclaimer banner state: a one-time dismiss flag persisted to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DISCLAIMER_TEXT: &str = "Results are estimates based on the open-source X recommendation \
algorithm. Actual reach depends on factors no model can see: timing, audience, and luck.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DisclaimerFile {
    dismissed_at: Option<DateTime<Utc>>,
}

/// Whether the disclaimer has been dismissed, backed by a small JSON file.
#[derive(Debug, Clone)]
pub struct DisclaimerState {
    path: PathBuf,
    dismissed_at: Option<DateTime<Utc>>,
}

impl DisclaimerState {
    /// Load the flag from `path`. A missing or unreadable file means
    /// "not dismissed".
    pub fn load(path: &Path) -> Self {
        let dismissed_at = fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str::<DisclaimerFile>(&json).ok())
            .and_then(|f| f.dismissed_at);

        debug!(path = %path.display(), dismissed = dismissed_at.is_some(), "Loaded disclaimer state");

        Self {
            path: path.to_path_buf(),
            dismissed_at,
        }
    }

    pub fn should_show(&self) -> bool {
        self.dismissed_at.is_none()
    }

    pub fn dismissed_at(&self) -> Option<DateTime<Utc>> {
        self.dismissed_at
    }

    /// Record the dismissal and write it to disk, creating parent dirs.
    pub fn dismiss(&mut self) -> Result<()> {
        let now = Utc::now();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string(&DisclaimerFile {
            dismissed_at: Some(now),
        })?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        self.dismissed_at = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("virality-disclaimer-{}-{name}", std::process::id()))
            .join("disclaimer.json")
    }

    #[test]
    fn missing_file_shows_banner() {
        let state = DisclaimerState::load(&scratch_path("missing"));
        assert!(state.should_show());
    }

    #[test]
    fn dismissal_persists() {
        let path = scratch_path("persist");
        let mut state = DisclaimerState::load(&path);
        state.dismiss().unwrap();
        assert!(!state.should_show());

        let reloaded = DisclaimerState::load(&path);
        assert!(!reloaded.should_show());
        assert_eq!(reloaded.dismissed_at(), state.dismissed_at());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_shows_banner() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert!(DisclaimerState::load(&path).should_show());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
