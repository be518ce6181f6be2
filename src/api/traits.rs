// Backend trait: the seam between dashboard state and the HTTP client.
//
// The dashboard only talks to this trait, so tests can hand it a canned
// or failing backend without opening a socket.

use anyhow::Result;
use async_trait::async_trait;

use super::types::{
    AccountSimulationRequest, AccountSimulationResponse, CombinedAnalysisRequest,
    CombinedAnalysisResponse, ContentAnalysisRequest, ContentAnalysisResponse,
};

/// The three scoring operations the dashboard submits.
#[async_trait]
pub trait ViralityBackend: Send + Sync {
    /// Score a single post.
    async fn analyze_content(
        &self,
        request: &ContentAnalysisRequest,
    ) -> Result<ContentAnalysisResponse>;

    /// Simulate an account's reach from its metrics.
    async fn simulate_account(
        &self,
        request: &AccountSimulationRequest,
    ) -> Result<AccountSimulationResponse>;

    /// Score a post and account together, with a server-side aggregate.
    async fn analyze_combined(
        &self,
        request: &CombinedAnalysisRequest,
    ) -> Result<CombinedAnalysisResponse>;
}
