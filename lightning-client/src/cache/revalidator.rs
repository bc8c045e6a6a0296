use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use super::PollingCache;

/// Periodically refreshes whichever key is currently displayed
pub struct CacheRevalidator<V: Clone> {
    cache: Arc<PollingCache<V>>,
    interval: Duration,
}

impl<V> CacheRevalidator<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(cache: Arc<PollingCache<V>>, interval: Duration) -> Self {
        Self { cache, interval }
    }

    pub fn start(self) -> JoinHandle<()> {
        info!(
            "Starting cache revalidator (interval: {} seconds)",
            self.interval.as_secs()
        );

        tokio::spawn(async move {
            let mut ticker = interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the displayed key was just loaded
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let Some(key) = self.cache.active_key().await else {
                    continue;
                };
                debug!("Revalidating '{}'", key);
                self.cache.revalidate(&key).await;
            }
        })
    }
}
