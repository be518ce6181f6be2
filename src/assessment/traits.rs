// Assessment provider trait and the assessment shape every provider returns.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A chat model's take on a post, bucketed into short lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrokAssessment {
    pub summary: String,
    #[serde(default)]
    pub viral_hooks: Vec<String>,
    #[serde(default)]
    pub engagement_drivers: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub similar_viral_posts: Vec<String>,
}

impl GrokAssessment {
    /// Assessment made only of a summary, used when the model ignored the
    /// JSON format.
    pub fn summary_only(summary: String) -> Self {
        Self {
            summary,
            ..Self::default()
        }
    }
}

/// Something that can assess a post's viral potential.
#[async_trait]
pub trait AssessmentProvider: Send + Sync {
    async fn assess(&self, content: &str) -> Result<GrokAssessment>;
}
