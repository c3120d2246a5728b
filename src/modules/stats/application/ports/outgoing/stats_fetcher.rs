use async_trait::async_trait;

use crate::modules::stats::domain::entities::StatsProvider;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsFetchError {
    #[error("No such user on the provider")]
    NotFound,

    #[error("Provider rate limit reached")]
    RateLimited,

    #[error("Provider request failed: {0}")]
    Upstream(String),

    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

/// One external stats API. The returned value is the provider summary,
/// already shaped for clients.
#[async_trait]
pub trait StatsFetcher: Send + Sync {
    fn provider(&self) -> StatsProvider;

    async fn fetch(&self, username: &str) -> Result<serde_json::Value, StatsFetchError>;
}
