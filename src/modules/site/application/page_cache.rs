use std::collections::HashMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::shared::lock::mutex_lock;

const SOURCE: &str = "site::page_cache";

/// Result of one page generation.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Found(Arc<Value>),
    /// The page's record does not exist. Distinct from a page that exists
    /// but has nothing to list.
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Hit,
    Stale,
    Miss,
}

impl CacheState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheState::Hit => "HIT",
            CacheState::Stale => "STALE",
            CacheState::Miss => "MISS",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Served {
    Page { props: Arc<Value>, state: CacheState },
    NotFound,
    Failed,
}

struct CachedPage {
    props: Arc<Value>,
    generated_at: Instant,
    expired: bool,
}

type Generation = Shared<BoxFuture<'static, PageOutcome>>;

/// Per-route cache of generated page props.
///
/// - miss: the caller waits for generation; concurrent callers for the
///   same route share that one generation.
/// - fresh hit: served as is.
/// - stale hit (older than `revalidate`, or expired by an admin write):
///   served immediately while one background generation runs.
/// - a generation that reports `NotFound` drops the cached page.
///
/// Generations run on their own task, so a caller that goes away does not
/// cancel the work other callers are waiting on.
pub struct PageCache {
    revalidate: Duration,
    pages: Mutex<HashMap<String, CachedPage>>,
    inflight: Mutex<HashMap<String, Generation>>,
}

impl PageCache {
    pub fn new(revalidate: Duration) -> Self {
        Self {
            revalidate,
            pages: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    pub fn revalidate(&self) -> Duration {
        self.revalidate
    }

    pub async fn serve<F, Fut>(self: &Arc<Self>, key: &str, generate: F) -> Served
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PageOutcome> + Send + 'static,
    {
        match self.lookup(key) {
            Some((props, true)) => {
                debug!(key, "Page cache hit");
                Served::Page {
                    props,
                    state: CacheState::Hit,
                }
            }
            Some((props, false)) => {
                debug!(key, "Serving stale page, regenerating in background");
                drop(self.generation(key, generate));
                Served::Page {
                    props,
                    state: CacheState::Stale,
                }
            }
            None => {
                debug!(key, "Page cache miss, generating");
                match self.generation(key, generate).await {
                    PageOutcome::Found(props) => Served::Page {
                        props,
                        state: CacheState::Miss,
                    },
                    PageOutcome::NotFound => Served::NotFound,
                    PageOutcome::Failed(_) => Served::Failed,
                }
            }
        }
    }

    /// Generates `key` now, sharing any generation already running. Used
    /// for build-time warm-up.
    pub async fn regenerate<F, Fut>(self: &Arc<Self>, key: &str, generate: F) -> PageOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PageOutcome> + Send + 'static,
    {
        self.generation(key, generate).await
    }

    /// Marks every cached page stale. The next request for each one is
    /// still served from cache and triggers a background refresh.
    pub fn expire_all(&self) {
        let mut pages = mutex_lock(&self.pages, SOURCE, "expire_all");
        for page in pages.values_mut() {
            page.expired = true;
        }
        debug!(pages = pages.len(), "Expired all cached pages");
    }

    pub fn contains(&self, key: &str) -> bool {
        mutex_lock(&self.pages, SOURCE, "contains").contains_key(key)
    }

    pub fn is_generating(&self, key: &str) -> bool {
        mutex_lock(&self.inflight, SOURCE, "is_generating").contains_key(key)
    }

    pub fn len(&self) -> usize {
        mutex_lock(&self.pages, SOURCE, "len").len()
    }

    fn lookup(&self, key: &str) -> Option<(Arc<Value>, bool)> {
        let pages = mutex_lock(&self.pages, SOURCE, "lookup");
        pages.get(key).map(|page| {
            let fresh = !page.expired && page.generated_at.elapsed() < self.revalidate;
            (Arc::clone(&page.props), fresh)
        })
    }

    fn generation<F, Fut>(self: &Arc<Self>, key: &str, generate: F) -> Generation
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PageOutcome> + Send + 'static,
    {
        let mut inflight = mutex_lock(&self.inflight, SOURCE, "generation");
        if let Some(running) = inflight.get(key) {
            return running.clone();
        }

        let cache = Arc::clone(self);
        let owned_key = key.to_string();
        let work = generate();

        let task = tokio::spawn(async move {
            let outcome = match AssertUnwindSafe(work).catch_unwind().await {
                Ok(outcome) => outcome,
                Err(_) => PageOutcome::Failed("page generation panicked".to_string()),
            };
            cache.finish(&owned_key, &outcome);
            outcome
        });

        let shared = async move {
            task.await
                .unwrap_or_else(|e| PageOutcome::Failed(e.to_string()))
        }
        .boxed()
        .shared();

        inflight.insert(key.to_string(), shared.clone());
        shared
    }

    fn finish(&self, key: &str, outcome: &PageOutcome) {
        {
            let mut pages = mutex_lock(&self.pages, SOURCE, "finish");
            match outcome {
                PageOutcome::Found(props) => {
                    pages.insert(
                        key.to_string(),
                        CachedPage {
                            props: Arc::clone(props),
                            generated_at: Instant::now(),
                            expired: false,
                        },
                    );
                    debug!(key, "Page generated");
                }
                PageOutcome::NotFound => {
                    if pages.remove(key).is_some() {
                        info!(key, "Page no longer exists; dropped from cache");
                    }
                }
                PageOutcome::Failed(reason) => {
                    error!(key, reason = %reason, "Page generation failed; keeping previous copy");
                }
            }
        }

        mutex_lock(&self.inflight, SOURCE, "finish").remove(key);
    }
}
