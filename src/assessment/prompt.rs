// Prompt template and response parsing for post assessments.
//
// Models are asked for bare JSON but routinely wrap it in prose or code
// fences. The parser takes the outermost `{...}` block and falls back to
// a summary-only assessment when that fails.

use regex_lite::Regex;
use tracing::debug;

use super::traits::GrokAssessment;
use crate::output::truncate_chars;

/// Characters of raw model output kept when it can't be parsed.
const FALLBACK_SUMMARY_CHARS: usize = 200;

/// Build the assessment prompt for a post.
pub fn build_prompt(content: &str) -> String {
    format!(
        r#"You are analyzing a social media post for X (Twitter) viral potential. Be witty, direct, and helpful.

Analyze this post:
"{content}"

Respond in this exact JSON format (no markdown, just pure JSON):
{{
  "summary": "One sentence witty assessment of viral potential",
  "viral_hooks": ["list", "of", "what makes it shareable"],
  "engagement_drivers": ["what", "will", "get reactions"],
  "risks": ["what", "might", "backfire"],
  "improvements": ["specific", "actionable", "suggestions"],
  "similar_viral_posts": ["describe 1-2 similar posts that went viral"]
}}"#
    )
}

/// Extract the span from the first `{` to the last `}`, across lines.
pub fn extract_json_block(text: &str) -> Option<&str> {
    // (?s) lets `.` cross newlines; greedy so nested objects stay whole
    let re = Regex::new(r"(?s)\{.*\}").ok()?;
    re.find(text).map(|m| m.as_str())
}

/// Parse a model reply into an assessment.
///
/// Never fails: unparseable replies become a summary holding the first
/// 200 characters of the raw text.
pub fn parse_assessment(text: &str) -> GrokAssessment {
    if let Some(block) = extract_json_block(text) {
        match serde_json::from_str::<GrokAssessment>(block) {
            Ok(assessment) => return assessment,
            Err(e) => debug!(error = %e, "Assessment JSON block did not parse"),
        }
    }

    GrokAssessment::summary_only(text.chars().take(FALLBACK_SUMMARY_CHARS).collect())
}

/// Trimmed preview of a post for log lines.
pub(crate) fn content_preview(content: &str) -> String {
    truncate_chars(content, 50)
}
