//! Stale-while-revalidate cache with per-key request de-duplication.
//!
//! Every fetch runs on its own task, so a caller that stops waiting never
//! cancels it: the result is stored for the next reader either way.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::debug;

/// Key used when no summoner name was given
pub const CURRENT_KEY: &str = "current";

/// Produces a fresh value for a key. Must not fail; fallbacks belong inside.
pub type FetchFn<V> = Arc<dyn Fn(String) -> BoxFuture<'static, V> + Send + Sync>;

type PendingFetch<V> = Shared<BoxFuture<'static, V>>;

/// Cache identity for an optional summoner name
pub fn cache_key(summoner_name: Option<&str>) -> String {
    match summoner_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => CURRENT_KEY.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct CachedValue<V> {
    pub value: V,
    pub updated_at: DateTime<Utc>,
    fetched_at: Instant,
}

impl<V> CachedValue<V> {
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}

struct CacheEntry<V: Clone> {
    cached: Option<CachedValue<V>>,
    in_flight: Option<PendingFetch<V>>,
}

impl<V: Clone> CacheEntry<V> {
    fn new() -> Self {
        Self {
            cached: None,
            in_flight: None,
        }
    }
}

pub struct PollingCache<V: Clone> {
    fetch: FetchFn<V>,
    entries: Arc<Mutex<HashMap<String, CacheEntry<V>>>>,
    stale_after: Duration,
    active_key: RwLock<Option<String>>,
}

impl<V> PollingCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(fetch: FetchFn<V>, stale_after: Duration) -> Self {
        Self {
            fetch,
            entries: Arc::new(Mutex::new(HashMap::new())),
            stale_after,
            active_key: RwLock::new(None),
        }
    }

    /// Current value for `key`.
    ///
    /// Fresh values are served directly. A stale value is served as well, but
    /// a refresh is started behind it. Without any value the caller waits for
    /// the fetch, sharing it with every other caller of the same key.
    pub async fn get(&self, key: &str) -> V {
        let pending = {
            let mut entries = self.entries.lock().await;
            let entry = entries.entry(key.to_string()).or_insert_with(CacheEntry::new);

            let stale_value = match &entry.cached {
                Some(cached) if cached.age() < self.stale_after => return cached.value.clone(),
                Some(cached) => Some(cached.value.clone()),
                None => None,
            };

            let pending = self.start_fetch(key, entry);
            if let Some(value) = stale_value {
                debug!("Serving stale value for '{}' while refreshing", key);
                return value;
            }
            pending
        };
        pending.await
    }

    /// Refresh `key` regardless of staleness and wait for the new value.
    ///
    /// Joins a fetch that is already running instead of starting another.
    pub async fn revalidate(&self, key: &str) -> V {
        let pending = {
            let mut entries = self.entries.lock().await;
            let entry = entries.entry(key.to_string()).or_insert_with(CacheEntry::new);
            self.start_fetch(key, entry)
        };
        pending.await
    }

    /// Last stored value without triggering anything
    pub async fn peek(&self, key: &str) -> Option<CachedValue<V>> {
        let entries = self.entries.lock().await;
        entries.get(key).and_then(|entry| entry.cached.clone())
    }

    pub async fn is_fetching(&self, key: &str) -> bool {
        let entries = self.entries.lock().await;
        entries.get(key).is_some_and(|entry| entry.in_flight.is_some())
    }

    /// Mark the key currently on screen; the revalidator keeps it fresh
    pub async fn set_active_key(&self, key: impl Into<String>) {
        *self.active_key.write().await = Some(key.into());
    }

    pub async fn active_key(&self) -> Option<String> {
        self.active_key.read().await.clone()
    }

    // Called with the entries lock held
    fn start_fetch(&self, key: &str, entry: &mut CacheEntry<V>) -> PendingFetch<V> {
        if let Some(pending) = &entry.in_flight {
            debug!("Joining in-flight fetch for '{}'", key);
            return pending.clone();
        }

        debug!("Starting fetch for '{}'", key);
        let pending = (self.fetch)(key.to_string()).shared();
        entry.in_flight = Some(pending.clone());

        let entries = self.entries.clone();
        let key = key.to_string();
        let driver = pending.clone();
        tokio::spawn(async move {
            let value = driver.await;
            let mut entries = entries.lock().await;
            if let Some(entry) = entries.get_mut(&key) {
                entry.cached = Some(CachedValue {
                    value,
                    updated_at: Utc::now(),
                    fetched_at: Instant::now(),
                });
                entry.in_flight = None;
            }
        });

        pending
    }
}
