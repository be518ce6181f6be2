// Combined projection: display metrics derived from a post score and an
// account simulation.
//
// These are straight products of already-computed backend numbers. The
// server-side aggregate score is never recomputed here.

use serde::Serialize;

use crate::api::types::{AccountSimulationResponse, ContentAnalysisResponse};

/// How much the account amplifies the post, bucketed by reach multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoostLevel {
    Massive,
    Strong,
    Moderate,
    Slight,
    Limited,
}

impl BoostLevel {
    pub fn from_multiplier(multiplier: f64) -> Self {
        match multiplier {
            m if m >= 3.0 => BoostLevel::Massive,
            m if m >= 2.0 => BoostLevel::Strong,
            m if m >= 1.5 => BoostLevel::Moderate,
            m if m >= 1.0 => BoostLevel::Slight,
            _ => BoostLevel::Limited,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoostLevel::Massive => "MASSIVE BOOST",
            BoostLevel::Strong => "STRONG BOOST",
            BoostLevel::Moderate => "MODERATE BOOST",
            BoostLevel::Slight => "SLIGHT BOOST",
            BoostLevel::Limited => "LIMITED REACH",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BoostLevel::Massive => "🚀",
            BoostLevel::Strong => "📈",
            BoostLevel::Moderate => "⬆️",
            BoostLevel::Slight => "→",
            BoostLevel::Limited => "⬇️",
        }
    }
}

/// Everything the combined results panel shows beyond the two raw tiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedProjection {
    /// Post engagement potential (0-1) times account reach multiplier.
    /// Still a fraction; renderers scale it by 100 for display, so a
    /// multiplier above 1 can show more than 100%.
    pub adjusted_reach: f64,
    /// Chance of going viral once account reach is taken into account (0-1).
    pub viral_probability: f64,
    pub estimated_impressions: u64,
    pub multiplier: f64,
    pub boost: BoostLevel,
    pub insight: &'static str,
}

impl CombinedProjection {
    pub fn compute(post: &ContentAnalysisResponse, account: &AccountSimulationResponse) -> Self {
        let multiplier = account.projected_reach_multiplier;
        let adjusted_reach = post.engagement_potential * multiplier;
        let viral_probability = (f64::from(post.score) / 100.0) * account.viral_post_probability;
        let base_impressions = f64::from(post.score) * 100.0;
        let estimated_impressions = (base_impressions * multiplier).round().max(0.0) as u64;

        Self {
            adjusted_reach,
            viral_probability,
            estimated_impressions,
            multiplier,
            boost: BoostLevel::from_multiplier(multiplier),
            insight: insight(account.account_tier, post.tier_level, multiplier),
        }
    }
}

/// Pick the one-line takeaway for an account tier / post tier pairing.
/// The first matching rule wins.
pub fn insight(account_tier: u8, post_tier: u8, multiplier: f64) -> &'static str {
    if account_tier >= 8 && post_tier >= 8 {
        "Perfect storm! Elite account + viral content = massive reach potential. This could easily hit trending."
    } else if account_tier >= 6 && post_tier >= 7 {
        "Strong combination! Your established account gives this quality content excellent visibility."
    } else if account_tier <= 3 && post_tier >= 7 {
        "Great content, but limited by account reach. Focus on growing your audience to unlock full potential."
    } else if account_tier >= 7 && post_tier <= 4 {
        "Your account has reach, but this content needs work. Review the improvement tips to boost performance."
    } else if multiplier < 1.5 {
        "Low reach multiplier detected. Improve engagement rate and posting consistency to grow your account tier."
    } else {
        "Balanced metrics. Improve both account health and content quality for better viral potential."
    }
}

/// Compact count formatting: 1.2M, 3.4K, or the plain number.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_thresholds() {
        assert_eq!(BoostLevel::from_multiplier(3.0), BoostLevel::Massive);
        assert_eq!(BoostLevel::from_multiplier(2.99), BoostLevel::Strong);
        assert_eq!(BoostLevel::from_multiplier(1.5), BoostLevel::Moderate);
        assert_eq!(BoostLevel::from_multiplier(1.0), BoostLevel::Slight);
        assert_eq!(BoostLevel::from_multiplier(0.9), BoostLevel::Limited);
    }

    #[test]
    fn insight_first_match_wins() {
        assert!(insight(9, 9, 3.0).starts_with("Perfect storm"));
        // 8/7 matches the second rule, not the elite one
        assert!(insight(8, 7, 3.0).starts_with("Strong combination"));
        assert!(insight(2, 8, 1.1).starts_with("Great content"));
        assert!(insight(7, 3, 2.5).starts_with("Your account has reach"));
        assert!(insight(5, 5, 1.2).starts_with("Low reach multiplier"));
        assert!(insight(5, 5, 2.0).starts_with("Balanced metrics"));
    }

    #[test]
    fn count_formatting() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(15_400), "15.4K");
        assert_eq!(format_count(2_500_000), "2.5M");
    }
}
