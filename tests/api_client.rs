// HTTP client tests against an in-process axum backend.
//
// Each test binds a mock server on an ephemeral localhost port, so these
// run without the real scoring service.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use virality::api::client::ViralityClient;
use virality::api::traits::ViralityBackend;
use virality::api::types::{ContentType, MediaType};
use virality::dashboard::{AccountForm, Dashboard, PostDraft, CONNECTION_ERROR};
use virality::output::terminal;

type Captured = Arc<Mutex<Option<Value>>>;

fn post_body() -> Value {
    json!({
        "score": 67,
        "tier_level": 7,
        "tier_name": "HOT",
        "tier_emoji": "▲",
        "tier_description": "Strong distribution.",
        "tier_color": "amber",
        "signal_scores": [
            {"signal": "reply", "score": 0.7, "weight": 13.5, "impact": "positive", "explanation": "Asks a question"}
        ],
        "engagement_potential": 0.62,
        "shareability": 0.4,
        "controversy_risk": 0.2,
        "negative_signal_risk": 0.05,
        "improvements": [
            {"signal": "media", "tip": "Add an image", "impact": "+2x", "priority": "high", "emoji": "▣"}
        ],
        "content_stats": {
            "char_count": 64,
            "word_count": 12,
            "hashtag_count": 1,
            "mention_count": 0,
            "has_question": true,
            "has_cta": false,
            "emotional_tone": "curious",
            "viral_hooks": 1
        }
    })
}

fn account_body() -> Value {
    json!({
        "account_tier": 5,
        "account_tier_name": "GROWING",
        "account_tier_emoji": "◇",
        "overall_score": 48,
        "engagement_rate": 3.3,
        "follower_quality_score": 0.66,
        "consistency_score": 0.8,
        "growth_potential": 0.5,
        "recommendations": [],
        "projected_reach_multiplier": 1.6,
        "viral_post_probability": 0.12
    })
}

async fn capture(State(captured): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
    let path_hint = body.get("followers_count").is_some();
    *captured.lock().unwrap() = Some(body);
    if path_hint {
        Json(account_body())
    } else {
        Json(post_body())
    }
}

async fn combined(State(captured): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
    *captured.lock().unwrap() = Some(body);
    Json(json!({
        "account_score": account_body(),
        "post_score": post_body(),
        "aggregate_score": 61,
        "aggregate_tier_level": 7,
        "aggregate_tier_name": "HOT",
        "aggregate_tier_emoji": "▲",
        "aggregate_tier_description": "Strong distribution.",
        "aggregate_tier_color": "amber"
    }))
}

async fn spawn_backend() -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/api/analyze", post(capture))
        .route("/api/account/simulate", post(capture))
        .route("/api/analyze/combined", post(combined))
        .route(
            "/api/tiers",
            get(|| async {
                Json(json!({"tiers": [
                    {"level": 1, "name": "INVISIBLE", "emoji": "·", "description": "Nobody sees it",
                     "min_score": 0, "max_score": 10, "color": "#333"}
                ]}))
            }),
        )
        .route("/health", get(|| async { Json(json!({"status": "healthy"})) }))
        .with_state(Arc::clone(&captured));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/"), captured)
}

async fn spawn_rejecting_backend() -> String {
    let app = Router::new().route(
        "/api/analyze",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "content too long") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_diversity_backend() -> String {
    let app = Router::new().route(
        "/api/analyze",
        post(|| async {
            let mut body = post_body();
            body["diversity"] = json!({
                "diversity_score": 42,
                "diversity_tier": "LOW_DIVERSITY",
                "tier_description": "Mostly plain text.",
                "factors": {
                    "format_diversity": {"score": 0.25, "description": "text only"},
                    "engagement_diversity": {"description": "no score here"},
                    "media_count": 1,
                    "notes": ["free", "form"]
                }
            });
            Json(body)
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn loose_diversity_factors_still_parse() {
    let url = spawn_diversity_backend().await;
    let client = ViralityClient::new(&url).unwrap();

    let response = client
        .analyze_content(&PostDraft::new("plain words").to_request())
        .await
        .unwrap();
    let diversity = response.diversity.expect("diversity block present");
    assert_eq!(diversity.diversity_score, 42);
    assert_eq!(diversity.factor_score("format_diversity"), Some(0.25));
    assert_eq!(diversity.factor_score("engagement_diversity"), Some(0.0));
    assert_eq!(diversity.factor_score("media_count"), Some(0.0));
    assert_eq!(diversity.factor_score("topic_richness"), None);

    colored::control::set_override(false);
    let rendered = terminal::render_diversity(&diversity);
    assert!(rendered.contains("format diversity"));
    assert!(rendered.contains(" 25%"));
    assert!(!rendered.contains("media count"));
}

#[tokio::test]
async fn analyze_sends_snake_case_body() {
    let (url, captured) = spawn_backend().await;
    let client = ViralityClient::new(&url).unwrap();

    let mut draft = PostDraft::new("Which editor do you use?");
    draft.set_media(Some(MediaType::Video));
    draft.set_video_seconds(12.5);

    let response = client.analyze_content(&draft.to_request()).await.unwrap();
    assert_eq!(response.score, 67);
    assert_eq!(response.improvements[0].action, None);
    assert!(response.diversity.is_none());

    let body = captured.lock().unwrap().clone().unwrap();
    assert_eq!(body["content"], "Which editor do you use?");
    assert_eq!(body["has_media"], true);
    assert_eq!(body["media_type"], "video");
    assert_eq!(body["video_duration_ms"], 12_500);
}

#[tokio::test]
async fn text_only_post_omits_video_duration() {
    let (url, captured) = spawn_backend().await;
    let client = ViralityClient::new(&url).unwrap();

    client
        .analyze_content(&PostDraft::new("plain").to_request())
        .await
        .unwrap();

    let body = captured.lock().unwrap().clone().unwrap();
    assert_eq!(body["has_media"], false);
    assert_eq!(body["media_type"], "none");
    assert!(body.get("video_duration_ms").is_none());
}

#[tokio::test]
async fn simulate_sends_account_form() {
    let (url, captured) = spawn_backend().await;
    let client = ViralityClient::new(&url).unwrap();

    let response = client
        .simulate_account(&AccountForm::default().to_request())
        .await
        .unwrap();
    assert_eq!(response.account_tier, 5);

    let body = captured.lock().unwrap().clone().unwrap();
    assert_eq!(body["followers_count"], 1000);
    assert_eq!(body["account_age_days"], 365);
    assert_eq!(body["is_verified"], false);
    assert_eq!(body["niche"], "tech");
}

#[tokio::test]
async fn combined_request_is_flat() {
    let (url, captured) = spawn_backend().await;
    let mut dashboard = Dashboard::new(ViralityClient::new(&url).unwrap());
    dashboard.post_draft = PostDraft::new("🧵 Thread: lessons from a year of Rust");
    dashboard.content_type = ContentType::Thread;

    dashboard.analyze_combined().await;
    assert_eq!(dashboard.aggregate_score(), Some(61));
    assert!(dashboard.actions().is_some());

    let body = captured.lock().unwrap().clone().unwrap();
    assert_eq!(body["content_type"], "thread");
    assert_eq!(body["content"], "🧵 Thread: lessons from a year of Rust");
    assert_eq!(body["followers_count"], 1000);
    assert!(body.get("account").is_none());
}

#[tokio::test]
async fn tiers_and_health() {
    let (url, _) = spawn_backend().await;
    let client = ViralityClient::new(&url).unwrap();

    let tiers = client.tiers().await.unwrap();
    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0].name, "INVISIBLE");
    assert_eq!(client.health().await.unwrap(), "healthy");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let url = spawn_rejecting_backend().await;
    let client = ViralityClient::new(&url).unwrap();

    let err = client
        .analyze_content(&PostDraft::new("x".repeat(300)).to_request())
        .await
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("422"), "unexpected error: {message}");
    assert!(message.contains("content too long"));
}

#[tokio::test]
async fn unreachable_backend_surfaces_connection_error() {
    let mut dashboard = Dashboard::new(ViralityClient::new("http://127.0.0.1:1").unwrap());
    dashboard.post_draft = PostDraft::new("anyone there?");
    dashboard.analyze_post().await;

    assert_eq!(dashboard.post().error(), Some(CONNECTION_ERROR));
    assert!(!dashboard.post().is_loading());
    assert!(dashboard.post().result().is_none());
}
