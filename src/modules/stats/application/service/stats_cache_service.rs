use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::TimeDelta;
use tracing::{debug, info, warn};

use crate::modules::stats::application::ports::incoming::use_cases::{
    GetStatsError, GetStatsUseCase, StatsLookup,
};
use crate::modules::stats::application::ports::outgoing::{
    Clock, StatsCacheStore, StatsFetchError, StatsFetcher,
};
use crate::modules::stats::domain::entities::{
    cache_key, parse_username, StatsCacheEntry, StatsProvider,
};
use crate::shared::lock::mutex_lock;

const SOURCE: &str = "stats::stats_cache_service";

type KeyGate = Arc<tokio::sync::Mutex<()>>;

/// Read-through TTL cache in front of the external stats APIs.
///
/// Expiry is checked lazily on read. A failed external call writes nothing,
/// so an older entry stays in the store untouched. Concurrent misses for
/// the same key queue behind one gate and re-check the cache once they get
/// through, which turns N identical misses into one external call.
pub struct StatsCacheService {
    store: Arc<dyn StatsCacheStore>,
    fetchers: HashMap<StatsProvider, Arc<dyn StatsFetcher>>,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
    gates: Mutex<HashMap<String, KeyGate>>,
}

impl StatsCacheService {
    pub fn new(
        store: Arc<dyn StatsCacheStore>,
        fetchers: Vec<Arc<dyn StatsFetcher>>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        let fetchers = fetchers
            .into_iter()
            .map(|f| (f.provider(), f))
            .collect::<HashMap<_, _>>();

        Self {
            store,
            fetchers,
            clock,
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            gates: Mutex::new(HashMap::new()),
        }
    }

    async fn fresh_entry(&self, key: &str) -> Option<StatsCacheEntry> {
        match self.store.get(key).await {
            Ok(Some(entry)) if entry.is_fresh(self.clock.now(), self.ttl) => Some(entry),
            Ok(Some(_)) => {
                debug!(key, "Stats cache entry expired");
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "Stats cache read failed; treating as miss");
                None
            }
        }
    }

    fn gate(&self, key: &str) -> KeyGate {
        let mut gates = mutex_lock(&self.gates, SOURCE, "gate");
        Arc::clone(gates.entry(key.to_string()).or_default())
    }

    /// Drops the gate once nobody else holds or waits on it.
    fn release_gate(&self, key: &str, gate: KeyGate) {
        let mut gates = mutex_lock(&self.gates, SOURCE, "release_gate");
        // One reference in the map, one here.
        if Arc::strong_count(&gate) <= 2 {
            gates.remove(key);
        }
    }

    async fn refresh(
        &self,
        provider: StatsProvider,
        username: &str,
        key: &str,
    ) -> Result<StatsLookup, GetStatsError> {
        let fetcher = self.fetchers.get(&provider).ok_or_else(|| {
            GetStatsError::Unavailable(format!("{} stats are not configured", provider))
        })?;

        let value = fetcher.fetch(username).await.map_err(|e| {
            warn!(%provider, username, error = %e, "Stats fetch failed; cache left untouched");
            map_fetch_error(e)
        })?;

        let entry = StatsCacheEntry::new(value, self.clock.now());
        if let Err(e) = self.store.put(key, &entry).await {
            warn!(key, error = %e, "Stats cache write failed; serving uncached result");
        } else {
            info!(key, "Stats cache refreshed");
        }

        Ok(StatsLookup {
            value: entry.value,
            fetched_at: entry.timestamp,
            cache_hit: false,
        })
    }
}

#[async_trait]
impl GetStatsUseCase for StatsCacheService {
    async fn execute(
        &self,
        provider: StatsProvider,
        username: &str,
    ) -> Result<StatsLookup, GetStatsError> {
        let username = parse_username(username).map_err(GetStatsError::InvalidUsername)?;
        let key = cache_key(provider, &username);

        if let Some(entry) = self.fresh_entry(&key).await {
            debug!(key, "Stats cache hit");
            return Ok(hit(entry));
        }

        let gate = self.gate(&key);
        let result = {
            let _turn = gate.lock().await;

            match self.fresh_entry(&key).await {
                Some(entry) => {
                    debug!(key, "Stats cache filled while waiting");
                    Ok(hit(entry))
                }
                None => self.refresh(provider, &username, &key).await,
            }
        };
        self.release_gate(&key, gate);

        result
    }
}

fn hit(entry: StatsCacheEntry) -> StatsLookup {
    StatsLookup {
        value: entry.value,
        fetched_at: entry.timestamp,
        cache_hit: true,
    }
}

fn map_fetch_error(e: StatsFetchError) -> GetStatsError {
    match e {
        StatsFetchError::NotFound => GetStatsError::NotFound,
        StatsFetchError::RateLimited => GetStatsError::RateLimited,
        StatsFetchError::Upstream(msg) | StatsFetchError::Decode(msg) => {
            GetStatsError::Unavailable(msg)
        }
    }
}
