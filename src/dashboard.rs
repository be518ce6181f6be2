// Dashboard state: form inputs, in-flight flags and the latest result for
// each panel.
//
// Submits never fail from the caller's point of view. A failed request
// leaves a user-facing message on its panel and the cause in the log.

use serde::Serialize;
use tracing::{info, warn};

use crate::actionables::{generate_actions, Action};
use crate::api::traits::ViralityBackend;
use crate::api::types::{
    AccountSimulationRequest, AccountSimulationResponse, CombinedAnalysisRequest,
    CombinedAnalysisResponse, ContentAnalysisRequest, ContentAnalysisResponse, ContentType,
    MediaType,
};
use crate::assessment::prompt::content_preview;
use crate::assessment::traits::{AssessmentProvider, GrokAssessment};

/// Shown for any failed backend request.
pub const CONNECTION_ERROR: &str = "Connection failed. Ensure backend is running";

/// Shown for any failed assessment request.
pub const AI_ERROR: &str = "Failed to connect to AI service";

/// Posts longer than this are flagged in the input counter.
pub const POST_CHAR_LIMIT: usize = 280;

/// Counter turns amber past this many characters.
pub const POST_CHAR_WARNING: usize = 250;

/// One result area: the last good response, a loading flag, an error.
#[derive(Debug, Clone)]
pub struct Panel<T> {
    result: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            result: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> Panel<T> {
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the outcome of a request. Errors keep the previous result.
    fn finish(&mut self, outcome: anyhow::Result<T>, message: &str) {
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "{message}");
                self.error = Some(message.to_string());
            }
        }
        self.loading = false;
    }
}

/// Account niche options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    #[default]
    Tech,
    Crypto,
    Politics,
    Entertainment,
    Sports,
    Business,
    Lifestyle,
    Gaming,
    Other,
}

impl Niche {
    pub fn as_str(&self) -> &'static str {
        match self {
            Niche::Tech => "tech",
            Niche::Crypto => "crypto",
            Niche::Politics => "politics",
            Niche::Entertainment => "entertainment",
            Niche::Sports => "sports",
            Niche::Business => "business",
            Niche::Lifestyle => "lifestyle",
            Niche::Gaming => "gaming",
            Niche::Other => "other",
        }
    }
}

/// Account metrics as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountForm {
    pub followers_count: u64,
    pub following_count: u64,
    pub avg_likes: f64,
    pub avg_replies: f64,
    pub avg_retweets: f64,
    pub posts_per_week: f64,
    pub account_age_days: u32,
    pub is_verified: bool,
    pub niche: Niche,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            followers_count: 1000,
            following_count: 500,
            avg_likes: 25.0,
            avg_replies: 5.0,
            avg_retweets: 3.0,
            posts_per_week: 7.0,
            account_age_days: 365,
            is_verified: false,
            niche: Niche::Tech,
        }
    }
}

impl AccountForm {
    pub fn to_request(&self) -> AccountSimulationRequest {
        AccountSimulationRequest {
            followers_count: self.followers_count,
            following_count: self.following_count,
            avg_likes: self.avg_likes,
            avg_replies: self.avg_replies,
            avg_retweets: self.avg_retweets,
            posts_per_week: self.posts_per_week,
            // The backend rejects accounts younger than one day
            account_age_days: self.account_age_days.max(1),
            is_verified: self.is_verified,
            niche: Some(self.niche.as_str().to_string()),
        }
    }
}

/// Canned audience sizes. Applying one only touches follower and
/// engagement numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AccountPreset {
    Small,
    Average,
    Growing,
    Large,
}

impl AccountPreset {
    pub fn apply(&self, form: &mut AccountForm) {
        let (followers, following, likes, replies, retweets) = match self {
            AccountPreset::Small => (100, 200, 5.0, 1.0, 0.0),
            AccountPreset::Average => (1_000, 500, 25.0, 5.0, 3.0),
            AccountPreset::Growing => (50_000, 1_000, 500.0, 50.0, 100.0),
            AccountPreset::Large => (500_000, 500, 5_000.0, 500.0, 1_000.0),
        };
        form.followers_count = followers;
        form.following_count = following;
        form.avg_likes = likes;
        form.avg_replies = replies;
        form.avg_retweets = retweets;
    }
}

/// Example posts offered as starting points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PostTemplate {
    HotTake,
    Thread,
    Question,
    Meme,
}

impl PostTemplate {
    pub fn label(&self) -> &'static str {
        match self {
            PostTemplate::HotTake => "Hot Take",
            PostTemplate::Thread => "Thread",
            PostTemplate::Question => "Question",
            PostTemplate::Meme => "Meme",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            PostTemplate::HotTake => {
                "Unpopular opinion: Tabs are better than spaces and I will die on this hill. Fight me."
            }
            PostTemplate::Thread => {
                "Thread: 10 things I learned building a startup that nobody talks about 🧵\n\n1/ Most \"overnight successes\" took 10 years..."
            }
            PostTemplate::Question => {
                "What's the one piece of advice you wish someone gave you when you started your career? I'll go first..."
            }
            PostTemplate::Meme => {
                "Me: I'll just check Twitter for 5 minutes\n\n*3 hours later*\n\nMe: How did I end up watching a thread about the history of doorknobs?"
            }
        }
    }
}

/// A post being composed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub content: String,
    has_media: bool,
    media_type: MediaType,
    video_duration_ms: Option<u64>,
}

impl PostDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Attach media, or detach it with `None`. Detaching also clears the
    /// video duration.
    pub fn set_media(&mut self, media: Option<MediaType>) {
        match media {
            Some(MediaType::None) | None => {
                self.has_media = false;
                self.media_type = MediaType::None;
                self.video_duration_ms = None;
            }
            Some(kind) => {
                self.has_media = true;
                self.media_type = kind;
                if kind != MediaType::Video {
                    self.video_duration_ms = None;
                }
            }
        }
    }

    /// Set the video length in seconds. Ignored unless the media is video.
    pub fn set_video_seconds(&mut self, seconds: f64) {
        if self.media_type == MediaType::Video && seconds > 0.0 {
            self.video_duration_ms = Some((seconds * 1000.0).round() as u64);
        }
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn video_duration_ms(&self) -> Option<u64> {
        self.video_duration_ms
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_over_limit(&self) -> bool {
        self.char_count() > POST_CHAR_LIMIT
    }

    /// Whitespace-only drafts are never sent.
    pub fn is_submittable(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Error out on a draft that would be skipped, for callers that need
    /// to report it instead.
    pub fn ensure_submittable(&self) -> anyhow::Result<()> {
        if !self.is_submittable() {
            anyhow::bail!("Post text is empty");
        }
        Ok(())
    }

    pub fn to_request(&self) -> ContentAnalysisRequest {
        ContentAnalysisRequest {
            content: self.content.clone(),
            has_media: self.has_media,
            media_type: self.media_type,
            video_duration_ms: self.video_duration_ms,
        }
    }
}

/// Which detail view follows the meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ResultTab {
    #[default]
    Breakdown,
    Tips,
    Grok,
}

impl ResultTab {
    pub const ALL: [ResultTab; 3] = [ResultTab::Breakdown, ResultTab::Tips, ResultTab::Grok];

    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Breakdown => "BREAKDOWN",
            ResultTab::Tips => "TIPS",
            ResultTab::Grok => "GROK",
        }
    }

    /// The tab to the right, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            ResultTab::Breakdown => ResultTab::Tips,
            ResultTab::Tips => ResultTab::Grok,
            ResultTab::Grok => ResultTab::Breakdown,
        }
    }
}

/// All dashboard state for one session.
pub struct Dashboard<B> {
    backend: B,
    pub account_form: AccountForm,
    pub post_draft: PostDraft,
    pub content_type: ContentType,
    pub active_tab: ResultTab,
    analyzed_content: String,
    post: Panel<ContentAnalysisResponse>,
    account: Panel<AccountSimulationResponse>,
    combined: Panel<CombinedAnalysisResponse>,
    assessment: Panel<GrokAssessment>,
}

impl<B: ViralityBackend> Dashboard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            account_form: AccountForm::default(),
            post_draft: PostDraft::default(),
            content_type: ContentType::default(),
            active_tab: ResultTab::default(),
            analyzed_content: String::new(),
            post: Panel::default(),
            account: Panel::default(),
            combined: Panel::default(),
            assessment: Panel::default(),
        }
    }

    pub fn post(&self) -> &Panel<ContentAnalysisResponse> {
        &self.post
    }

    pub fn account(&self) -> &Panel<AccountSimulationResponse> {
        &self.account
    }

    pub fn combined(&self) -> &Panel<CombinedAnalysisResponse> {
        &self.combined
    }

    pub fn assessment(&self) -> &Panel<GrokAssessment> {
        &self.assessment
    }

    /// The text of the last submitted post, as the assessment sees it.
    pub fn analyzed_content(&self) -> &str {
        &self.analyzed_content
    }

    /// Submit the post draft for scoring. Empty drafts are ignored.
    pub async fn analyze_post(&mut self) {
        if !self.post_draft.is_submittable() {
            return;
        }
        let request = self.post_draft.to_request();
        self.analyzed_content = request.content.clone();
        info!(preview = %content_preview(&request.content), "Analyzing post");

        self.post.begin();
        let outcome = self.backend.analyze_content(&request).await;
        self.post.finish(outcome, CONNECTION_ERROR);
    }

    /// Submit the account form for simulation.
    pub async fn simulate_account(&mut self) {
        let request = self.account_form.to_request();
        info!(followers = request.followers_count, "Simulating account");

        self.account.begin();
        let outcome = self.backend.simulate_account(&request).await;
        self.account.finish(outcome, CONNECTION_ERROR);
    }

    /// Submit both forms together. Empty drafts are ignored.
    pub async fn analyze_combined(&mut self) {
        if !self.post_draft.is_submittable() {
            return;
        }
        let request = CombinedAnalysisRequest {
            content: self.post_draft.to_request(),
            content_type: self.content_type,
            account: self.account_form.to_request(),
        };
        self.analyzed_content = request.content.content.clone();
        info!(preview = %content_preview(&self.analyzed_content), "Running combined analysis");

        self.combined.begin();
        let outcome = self.backend.analyze_combined(&request).await;
        self.combined.finish(outcome, CONNECTION_ERROR);
    }

    /// Ask the provider about the last analyzed post.
    pub async fn assess(&mut self, provider: &dyn AssessmentProvider) {
        if self.analyzed_content.trim().is_empty() {
            return;
        }
        self.assessment.begin();
        let outcome = provider.assess(&self.analyzed_content).await;
        self.assessment.finish(outcome, AI_ERROR);
    }

    /// Ask the provider about the current draft without scoring it first.
    /// Empty drafts are ignored.
    pub async fn assess_draft(&mut self, provider: &dyn AssessmentProvider) {
        if !self.post_draft.is_submittable() {
            return;
        }
        self.analyzed_content = self.post_draft.content.clone();
        self.assess(provider).await;
    }

    /// Server-side aggregate score, when a combined analysis is held.
    pub fn aggregate_score(&self) -> Option<u8> {
        self.combined.result().map(|c| c.aggregate_score)
    }

    /// Action items for the held combined analysis.
    pub fn actions(&self) -> Option<Vec<Action>> {
        self.combined.result().map(|c| {
            generate_actions(
                &c.post_score,
                &c.account_score,
                f64::from(c.aggregate_score),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_defaults_match_form() {
        let req = AccountForm::default().to_request();
        assert_eq!(req.followers_count, 1000);
        assert_eq!(req.following_count, 500);
        assert_eq!(req.posts_per_week, 7.0);
        assert_eq!(req.niche.as_deref(), Some("tech"));
    }

    #[test]
    fn account_age_floor_is_one_day() {
        let form = AccountForm {
            account_age_days: 0,
            ..AccountForm::default()
        };
        assert_eq!(form.to_request().account_age_days, 1);
    }

    #[test]
    fn preset_keeps_activity_fields() {
        let mut form = AccountForm {
            posts_per_week: 21.0,
            ..AccountForm::default()
        };
        AccountPreset::Large.apply(&mut form);
        assert_eq!(form.followers_count, 500_000);
        assert_eq!(form.avg_retweets, 1_000.0);
        assert_eq!(form.posts_per_week, 21.0);
    }

    #[test]
    fn detaching_media_clears_duration() {
        let mut draft = PostDraft::new("clip");
        draft.set_media(Some(MediaType::Video));
        draft.set_video_seconds(12.5);
        assert_eq!(draft.video_duration_ms(), Some(12_500));

        draft.set_media(None);
        let req = draft.to_request();
        assert!(!req.has_media);
        assert_eq!(req.media_type, MediaType::None);
        assert_eq!(req.video_duration_ms, None);
    }

    #[test]
    fn duration_ignored_for_images() {
        let mut draft = PostDraft::new("pic");
        draft.set_media(Some(MediaType::Image));
        draft.set_video_seconds(5.0);
        assert_eq!(draft.video_duration_ms(), None);
    }

    #[test]
    fn char_limit_counts_chars_not_bytes() {
        let draft = PostDraft::new("🧵".repeat(POST_CHAR_LIMIT));
        assert_eq!(draft.char_count(), POST_CHAR_LIMIT);
        assert!(!draft.is_over_limit());
        assert!(!PostDraft::new("   \n").is_submittable());
    }

    #[test]
    fn blank_draft_is_rejected() {
        let err = PostDraft::new("  \n\t ").ensure_submittable().unwrap_err();
        assert_eq!(err.to_string(), "Post text is empty");
        assert!(PostDraft::new(" hi ").ensure_submittable().is_ok());
    }

    #[test]
    fn tabs_cycle() {
        let mut tab = ResultTab::default();
        for expected in [ResultTab::Tips, ResultTab::Grok, ResultTab::Breakdown] {
            tab = tab.next();
            assert_eq!(tab, expected);
        }
    }
}
