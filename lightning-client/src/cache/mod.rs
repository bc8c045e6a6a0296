//! Dashboard caching on top of the data client.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;

use lightning_common::DashboardSnapshot;

use crate::facade::DataClient;

mod polling;
mod revalidator;

pub use polling::{CURRENT_KEY, CachedValue, FetchFn, PollingCache, cache_key};
pub use revalidator::CacheRevalidator;

/// Cache of dashboard snapshots keyed by summoner name or [`CURRENT_KEY`]
pub fn dashboard_cache(client: DataClient, stale_after: Duration) -> PollingCache<DashboardSnapshot> {
    let fetch: FetchFn<DashboardSnapshot> = Arc::new(move |key: String| {
        let client = client.clone();
        async move {
            let summoner = (key != CURRENT_KEY).then_some(key.as_str());
            client.get_dashboard_data(summoner).await
        }
        .boxed()
    });
    PollingCache::new(fetch, stale_after)
}
