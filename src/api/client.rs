// HTTP client for the scoring backend.
//
// A thin reqwest wrapper with generic JSON GET/POST helpers. Every
// endpoint is a single request with no retries; callers decide how to
// surface failures.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::traits::ViralityBackend;
use super::types::{
    AccountSimulationRequest, AccountSimulationResponse, CombinedAnalysisRequest,
    CombinedAnalysisResponse, ContentAnalysisRequest, ContentAnalysisResponse, HealthResponse,
    RemoteTier, TiersResponse,
};

/// Default backend location when `VIRALITY_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the virality scoring backend.
pub struct ViralityClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViralityClient {
    /// Create a client pointing at the given base URL.
    ///
    /// A trailing slash is stripped so paths can always start with `/`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("virality/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body to `path` and deserialize the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        debug!(path = path, "POST request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Request to {path} failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{path} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {path} response"))
    }

    /// GET `path` and deserialize the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        debug!(path = path, "GET request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {path} failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{path} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {path} response"))
    }

    /// Fetch the backend's own tier table.
    pub async fn tiers(&self) -> Result<Vec<RemoteTier>> {
        let resp: TiersResponse = self.get_json("/api/tiers").await?;
        Ok(resp.tiers)
    }

    /// Check that the backend is up. Returns its reported status string.
    pub async fn health(&self) -> Result<String> {
        let resp: HealthResponse = self.get_json("/health").await?;
        Ok(resp.status)
    }
}

#[async_trait]
impl ViralityBackend for ViralityClient {
    async fn analyze_content(
        &self,
        request: &ContentAnalysisRequest,
    ) -> Result<ContentAnalysisResponse> {
        self.post_json("/api/analyze", request)
            .await
            .context("Failed to analyze content")
    }

    async fn simulate_account(
        &self,
        request: &AccountSimulationRequest,
    ) -> Result<AccountSimulationResponse> {
        self.post_json("/api/account/simulate", request)
            .await
            .context("Failed to simulate account")
    }

    async fn analyze_combined(
        &self,
        request: &CombinedAnalysisRequest,
    ) -> Result<CombinedAnalysisResponse> {
        self.post_json("/api/analyze/combined", request)
            .await
            .context("Failed to run combined analysis")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ViralityClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn bare_url_is_kept() {
        let client = ViralityClient::new(DEFAULT_API_URL).unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }
}
