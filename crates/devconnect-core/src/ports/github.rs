//! Upstream code-hosting port.

use async_trait::async_trait;

/// Client for the public repository listing of a GitHub account.
#[async_trait]
pub trait GithubClient: Send + Sync {
    /// The five most recently created public repositories of `username`,
    /// returned exactly as the upstream sent them.
    async fn recent_repos(&self, username: &str) -> Result<serde_json::Value, UpstreamError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Upstream responded with status {0}")]
    Status(u16),

    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream response could not be decoded: {0}")]
    Decode(String),
}
