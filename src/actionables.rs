// Action items: a prioritized to-do list derived from already-scored
// post and account responses.
//
// Every rule is a fixed threshold over a backend field. Nothing here
// rescores content; it only decides which canned advice applies.

use serde::Serialize;

use crate::api::types::{AccountSimulationResponse, ContentAnalysisResponse};

/// How urgently an action should be tackled. Ordered most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl ActionPriority {
    /// Sort key: critical=0, high=1, medium=2, low=3.
    pub fn rank(&self) -> u8 {
        match self {
            ActionPriority::Critical => 0,
            ActionPriority::High => 1,
            ActionPriority::Medium => 2,
            ActionPriority::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionPriority::Critical => "critical",
            ActionPriority::High => "high",
            ActionPriority::Medium => "medium",
            ActionPriority::Low => "low",
        }
    }
}

impl std::fmt::Display for ActionPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Content,
    Account,
    Engagement,
    Timing,
}

impl ActionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCategory::Content => "content",
            ActionCategory::Account => "account",
            ActionCategory::Engagement => "engagement",
            ActionCategory::Timing => "timing",
        }
    }
}

/// A single piece of advice with its priority and expected payoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub title: String,
    pub description: String,
    pub priority: ActionPriority,
    pub category: ActionCategory,
    pub impact: String,
}

impl Action {
    fn new(
        title: &str,
        description: impl Into<String>,
        priority: ActionPriority,
        category: ActionCategory,
        impact: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            priority,
            category,
            impact: impact.to_string(),
        }
    }
}

/// Diversity scores below this (out of 100) count as low variety.
const LOW_DIVERSITY_THRESHOLD: u8 = 50;

/// Build the sorted action list for a scored post, a simulated account and
/// the aggregate score shown alongside them.
///
/// Rules are evaluated in a fixed order and the result is stably sorted by
/// priority, so actions of equal priority keep their rule order.
pub fn generate_actions(
    post: &ContentAnalysisResponse,
    account: &AccountSimulationResponse,
    aggregate_score: f64,
) -> Vec<Action> {
    use ActionCategory::*;
    use ActionPriority::*;

    let mut actions = Vec::new();
    let stats = &post.content_stats;

    // Content quality
    if stats.char_count < 50 {
        actions.push(Action::new(
            "Expand Your Content",
            "Your post is very short. Add more context or details. Optimal range is 50-280 characters for better engagement.",
            High,
            Content,
            "+15-25% reach",
        ));
    }

    if stats.char_count > 280 && stats.viral_hooks == 0 {
        actions.push(Action::new(
            "Add Thread Indicator",
            "Long content works better as threads. Start with \"🧵 Thread:\" or number your points (1/, 2/, etc.).",
            Medium,
            Content,
            "+20-30% engagement",
        ));
    }

    if !stats.has_question && !stats.has_cta {
        actions.push(Action::new(
            "Add Engagement Trigger",
            "Include a question (\"What do you think?\") or CTA (\"Share if you agree\") to drive replies and interactions.",
            High,
            Engagement,
            "+25-40% replies",
        ));
    }

    if stats.hashtag_count == 0 {
        actions.push(Action::new(
            "Use 1-2 Relevant Hashtags",
            "Add hashtags related to trending topics in your niche. Optimal: 1-3 hashtags. Avoid more than 5.",
            Medium,
            Content,
            "+10-15% discoverability",
        ));
    } else if stats.hashtag_count > 5 {
        actions.push(Action::new(
            "Reduce Hashtag Count",
            format!(
                "You have {} hashtags. This looks spammy. Keep it to 1-3 for best results.",
                stats.hashtag_count
            ),
            Critical,
            Content,
            "Avoid -30% penalty",
        ));
    }

    if post
        .diversity
        .as_ref()
        .is_some_and(|d| d.diversity_score < LOW_DIVERSITY_THRESHOLD)
    {
        actions.push(Action::new(
            "Increase Content Variety",
            "Your content lacks diversity. Mix text with media, add emojis, include links, or mention relevant accounts.",
            High,
            Content,
            "+20-35% distribution",
        ));
    }

    if stats.viral_hooks == 0 && stats.char_count > 100 {
        actions.push(Action::new(
            "Add Viral Hooks",
            "Use proven patterns: \"Thread:\", \"POV:\", \"Nobody talks about...\", \"Hot take:\", or \"Here's why...\"",
            Medium,
            Content,
            "+15-25% shareability",
        ));
    }

    // Account quality
    if account.engagement_rate < 1.0 {
        actions.push(Action::new(
            "Improve Engagement Rate",
            "Your engagement is very low (<1%). Focus on creating conversation-starting content and engage with replies.",
            Critical,
            Account,
            "+40-60% reach",
        ));
    } else if account.engagement_rate < 2.0 {
        actions.push(Action::new(
            "Boost Engagement Rate",
            "Aim for 2-5% engagement rate. Reply to comments, ask questions, and post at peak times for your audience.",
            High,
            Engagement,
            "+25-40% visibility",
        ));
    }

    if account.follower_quality_score < 0.5 {
        actions.push(Action::new(
            "Improve Follower Quality",
            "Your follower/following ratio is low. Avoid follow-for-follow. Engage authentically with your niche community.",
            High,
            Account,
            "+20-35% algorithmic trust",
        ));
    }

    if account.consistency_score < 0.7 {
        actions.push(Action::new(
            "Post More Consistently",
            "Aim for 1-5 tweets per day. Consistency signals to the algorithm that you're an active, valuable account.",
            High,
            Timing,
            "+15-30% base reach",
        ));
    }

    let has_verification_tip = account
        .recommendations
        .iter()
        .any(|r| r.signal == "verification");
    if !has_verification_tip && aggregate_score < 70.0 {
        actions.push(Action::new(
            "Consider X Premium",
            "Verified accounts get +15 score boost and priority ranking. Worth it if you're serious about growth.",
            Medium,
            Account,
            "+20-40% reach boost",
        ));
    }

    // Timing
    if aggregate_score >= 60.0 {
        actions.push(Action::new(
            "Post During Peak Hours",
            "Your content is good! Maximize reach by posting when your audience is most active (usually 9-11 AM, 6-8 PM local time).",
            Medium,
            Timing,
            "+30-50% immediate engagement",
        ));
    }

    if post.controversy_risk > 0.7 {
        actions.push(Action::new(
            "Balance Controversy",
            "High controversy can drive engagement but also blocks/mutes. Follow up with value-add content to maintain trust.",
            Medium,
            Engagement,
            "Protect long-term reach",
        ));
    }

    // Vec::sort_by_key is stable
    actions.sort_by_key(|a| a.priority.rank());
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_rank_matches_ord() {
        let mut all = [
            ActionPriority::Low,
            ActionPriority::Critical,
            ActionPriority::Medium,
            ActionPriority::High,
        ];
        all.sort();
        let ranks: Vec<u8> = all.iter().map(|p| p.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn priority_display() {
        assert_eq!(ActionPriority::Critical.to_string(), "critical");
        assert_eq!(ActionCategory::Timing.as_str(), "timing");
    }
}
