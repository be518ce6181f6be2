// Wire types for the scoring backend.
//
// Requests mirror the backend's snake_case schema field for field.
// Responses are read-only snapshots; nothing here is recomputed locally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind of media attached to a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    None,
    Image,
    Video,
    Gif,
    Poll,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::None => "none",
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Gif => "gif",
            MediaType::Poll => "poll",
        }
    }
}

/// Post format, only used by the combined endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Short,
    Thread,
    Article,
    Longform,
    Quote,
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysisRequest {
    pub content: String,
    pub has_media: bool,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration_ms: Option<u64>,
}

/// Body of `POST /api/account/simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSimulationRequest {
    pub followers_count: u64,
    pub following_count: u64,
    pub avg_likes: f64,
    pub avg_replies: f64,
    pub avg_retweets: f64,
    pub posts_per_week: f64,
    pub account_age_days: u32,
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
}

/// Body of `POST /api/analyze/combined`: both forms flattened together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedAnalysisRequest {
    #[serde(flatten)]
    pub content: ContentAnalysisRequest,
    pub content_type: ContentType,
    #[serde(flatten)]
    pub account: AccountSimulationRequest,
}

/// Direction a signal pushes the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

/// One engagement signal as scored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalScore {
    pub signal: String,
    pub score: f64,
    pub weight: f64,
    pub impact: Impact,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipPriority {
    High,
    Medium,
    Low,
}

impl TipPriority {
    /// Short badge used by the tips list.
    pub fn badge(&self) -> &'static str {
        match self {
            TipPriority::High => "HIGH",
            TipPriority::Medium => "MED",
            TipPriority::Low => "LOW",
        }
    }
}

/// A backend-generated suggestion, shared by post and account responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementTip {
    pub signal: String,
    pub tip: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    pub impact: String,
    pub priority: TipPriority,
    pub emoji: String,
}

/// Surface features the backend extracted from the post text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStats {
    pub char_count: u32,
    pub word_count: u32,
    pub hashtag_count: u32,
    pub mention_count: u32,
    pub has_question: bool,
    pub has_cta: bool,
    pub emotional_tone: String,
    pub viral_hooks: u32,
}

/// Content diversity assessment (HIGHLY_DIVERSE … MONOTONE).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversityScore {
    pub diversity_score: u8,
    pub diversity_tier: String,
    pub tier_description: String,
    /// Free-form per-factor detail. Known factors are objects with a
    /// `score` (0-1) and a `description`, but the backend makes no promise.
    #[serde(default)]
    pub factors: BTreeMap<String, serde_json::Value>,
}

impl DiversityScore {
    /// Score of a named factor. Missing factors, non-object entries and
    /// non-numeric scores read as 0.
    pub fn factor_score(&self, key: &str) -> Option<f64> {
        let factor = self.factors.get(key)?;
        Some(factor.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0))
    }
}

/// Response of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysisResponse {
    pub score: u8,
    pub tier_level: u8,
    pub tier_name: String,
    pub tier_emoji: String,
    pub tier_description: String,
    pub tier_color: String,
    pub signal_scores: Vec<SignalScore>,
    pub engagement_potential: f64,
    pub shareability: f64,
    pub controversy_risk: f64,
    pub negative_signal_risk: f64,
    #[serde(default)]
    pub diversity: Option<DiversityScore>,
    pub improvements: Vec<ImprovementTip>,
    pub content_stats: ContentStats,
}

/// Response of `POST /api/account/simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSimulationResponse {
    pub account_tier: u8,
    pub account_tier_name: String,
    pub account_tier_emoji: String,
    pub overall_score: u8,
    pub engagement_rate: f64,
    pub follower_quality_score: f64,
    pub consistency_score: f64,
    pub growth_potential: f64,
    pub recommendations: Vec<ImprovementTip>,
    pub projected_reach_multiplier: f64,
    pub viral_post_probability: f64,
}

/// Response of `POST /api/analyze/combined`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedAnalysisResponse {
    pub account_score: AccountSimulationResponse,
    pub post_score: ContentAnalysisResponse,
    pub aggregate_score: u8,
    pub aggregate_tier_level: u8,
    pub aggregate_tier_name: String,
    pub aggregate_tier_emoji: String,
    pub aggregate_tier_description: String,
    pub aggregate_tier_color: String,
}

/// A tier entry as served by `GET /api/tiers`.
///
/// The backend's table uses its own names and colors; the local table in
/// `crate::tiers` is what the meters render with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTier {
    pub level: u8,
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub min_score: u8,
    pub max_score: u8,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct TiersResponse {
    pub tiers: Vec<RemoteTier>,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
