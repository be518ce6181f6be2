// Grok (xAI) assessment provider.
//
// xAI serves an OpenAI-compatible chat completions endpoint, so this is a
// single POST with bearer auth. The reply text goes through the shared
// tolerant parser.
//
// API docs: https://docs.x.ai/docs/api-reference

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::{build_prompt, content_preview, parse_assessment};
use super::traits::{AssessmentProvider, GrokAssessment};

pub const DEFAULT_GROK_API_URL: &str = "https://api.x.ai/v1";
pub const DEFAULT_GROK_MODEL: &str = "grok-beta";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Chat-completions backed assessment provider.
pub struct GrokProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GrokProvider {
    pub fn new(api_key: String, base_url: &str, model: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    /// Send one user message and return the first choice's text.
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call Grok API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Grok API returned {}: {}", status, body);
        }

        let result: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Grok API response")?;

        result
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| anyhow::anyhow!("Grok API returned no message content"))
    }
}

#[async_trait]
impl AssessmentProvider for GrokProvider {
    async fn assess(&self, content: &str) -> Result<GrokAssessment> {
        let reply = self.complete(&build_prompt(content)).await?;

        debug!(
            model = %self.model,
            reply_chars = reply.chars().count(),
            content_preview = %content_preview(content),
            "Assessed post"
        );

        Ok(parse_assessment(&reply))
    }
}

// --- Chat completions request/response types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}
