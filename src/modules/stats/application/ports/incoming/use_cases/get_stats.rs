use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::stats::domain::entities::{StatsProvider, UsernameError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetStatsError {
    #[error("{0}")]
    InvalidUsername(UsernameError),

    #[error("User not found")]
    NotFound,

    #[error("Rate limited by provider")]
    RateLimited,

    /// The external call failed; nothing was cached.
    #[error("Stats unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsLookup {
    pub value: serde_json::Value,
    pub fetched_at: DateTime<Utc>,
    pub cache_hit: bool,
}

#[async_trait]
pub trait GetStatsUseCase: Send + Sync {
    async fn execute(
        &self,
        provider: StatsProvider,
        username: &str,
    ) -> Result<StatsLookup, GetStatsError>;
}
