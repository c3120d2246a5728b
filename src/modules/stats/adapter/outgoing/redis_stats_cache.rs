use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};

use crate::modules::stats::application::ports::outgoing::{StatsCacheError, StatsCacheStore};
use crate::modules::stats::domain::entities::StatsCacheEntry;

/// Redis-backed stats cache.
///
/// ```text
/// stats:{provider}:{username} -> {"value": ..., "timestamp": "..."}
/// ```
///
/// Freshness is decided by the service from `timestamp`. The Redis TTL is
/// only housekeeping and is set to a multiple of the cache TTL, so an entry
/// whose refresh failed is still there for the next attempt.
#[derive(Clone)]
pub struct RedisStatsCacheStore {
    pool: Arc<Pool>,
    retain: Duration,
}

impl RedisStatsCacheStore {
    pub fn new(pool: Arc<Pool>, cache_ttl: Duration) -> Self {
        Self {
            pool,
            retain: cache_ttl.saturating_mul(2).max(Duration::from_secs(1)),
        }
    }

    fn redis_key(key: &str) -> String {
        format!("stats:{key}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, StatsCacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| StatsCacheError::Unavailable(format!("Pool error: {}", e)))
    }
}

fn decode(raw: &str) -> Result<StatsCacheEntry, StatsCacheError> {
    serde_json::from_str(raw).map_err(|e| StatsCacheError::Corrupt(e.to_string()))
}

#[async_trait]
impl StatsCacheStore for RedisStatsCacheStore {
    async fn get(&self, key: &str) -> Result<Option<StatsCacheEntry>, StatsCacheError> {
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = conn
            .get(Self::redis_key(key))
            .await
            .map_err(|e| StatsCacheError::Unavailable(e.to_string()))?;

        raw.as_deref().map(decode).transpose()
    }

    async fn put(&self, key: &str, entry: &StatsCacheEntry) -> Result<(), StatsCacheError> {
        let raw =
            serde_json::to_string(entry).map_err(|e| StatsCacheError::Corrupt(e.to_string()))?;
        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(Self::redis_key(key), raw, self.retain.as_secs())
            .await
            .map_err(|e| StatsCacheError::Unavailable(e.to_string()))?;

        Ok(())
    }
}
