use async_trait::async_trait;

use crate::modules::stats::domain::entities::StatsCacheEntry;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsCacheError {
    #[error("Cache backend unavailable: {0}")]
    Unavailable(String),

    #[error("Cache entry could not be decoded: {0}")]
    Corrupt(String),
}

/// Key/value storage for stats entries. Freshness is decided by the caller
/// from the entry timestamp; a store may keep entries past their TTL.
#[async_trait]
pub trait StatsCacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<StatsCacheEntry>, StatsCacheError>;

    async fn put(&self, key: &str, entry: &StatsCacheEntry) -> Result<(), StatsCacheError>;
}
