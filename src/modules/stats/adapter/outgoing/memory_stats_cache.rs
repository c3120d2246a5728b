use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::TimeDelta;
use tracing::debug;

use crate::modules::stats::application::ports::outgoing::{StatsCacheError, StatsCacheStore};
use crate::modules::stats::domain::entities::StatsCacheEntry;
use crate::shared::lock::mutex_lock;

const SOURCE: &str = "stats::memory_stats_cache";

/// Process-local store used when no Redis is configured.
///
/// Entries are kept for twice the cache TTL, like the Redis store, so a
/// stale value outlives one failed refresh. Older entries are swept on
/// every `put`, measured against the timestamp being written.
pub struct InMemoryStatsCacheStore {
    entries: Mutex<HashMap<String, StatsCacheEntry>>,
    retain: TimeDelta,
}

impl InMemoryStatsCacheStore {
    pub fn new(cache_ttl: Duration) -> Self {
        let retain = TimeDelta::from_std(cache_ttl.saturating_mul(2)).unwrap_or(TimeDelta::MAX);
        Self {
            entries: Mutex::new(HashMap::new()),
            retain: retain.max(TimeDelta::seconds(1)),
        }
    }

    pub fn len(&self) -> usize {
        mutex_lock(&self.entries, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl StatsCacheStore for InMemoryStatsCacheStore {
    async fn get(&self, key: &str) -> Result<Option<StatsCacheEntry>, StatsCacheError> {
        Ok(mutex_lock(&self.entries, SOURCE, "get").get(key).cloned())
    }

    async fn put(&self, key: &str, entry: &StatsCacheEntry) -> Result<(), StatsCacheError> {
        let mut entries = mutex_lock(&self.entries, SOURCE, "put");

        let before = entries.len();
        entries.retain(|_, kept| entry.timestamp - kept.timestamp < self.retain);
        let swept = before - entries.len();
        if swept > 0 {
            debug!(swept, "Dropped expired stats cache entries");
        }

        entries.insert(key.to_string(), entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    const TTL: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn test_put_overwrites_previous_entry() {
        let store = InMemoryStatsCacheStore::new(TTL);
        let old = StatsCacheEntry::new(json!({"v": 1}), Utc::now());
        let new = StatsCacheEntry::new(json!({"v": 2}), Utc::now());

        store.put("github:a", &old).await.unwrap();
        store.put("github:a", &new).await.unwrap();

        assert_eq!(store.get("github:a").await.unwrap(), Some(new));
        assert_eq!(store.get("leetcode:a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_sweeps_entries_older_than_twice_ttl() {
        let store = InMemoryStatsCacheStore::new(TTL);
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        store
            .put("github:old", &StatsCacheEntry::new(json!(1), t0))
            .await
            .unwrap();
        store
            .put(
                "github:recent",
                &StatsCacheEntry::new(json!(2), t0 + TimeDelta::hours(1)),
            )
            .await
            .unwrap();

        // Past 2x TTL for `old`, still inside it for `recent`.
        store
            .put(
                "leetcode:new",
                &StatsCacheEntry::new(json!(3), t0 + TimeDelta::hours(2)),
            )
            .await
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("github:old").await.unwrap(), None);
        assert!(store.get("github:recent").await.unwrap().is_some());
        assert!(store.get("leetcode:new").await.unwrap().is_some());
    }
}
