use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use lightning_common::{GridError, SpellSlot, SpellSlotGrid};

use super::CooldownTable;
use crate::error::ClientResult;
use crate::facade::DataClient;

const TICK: Duration = Duration::from_secs(1);

/// State behind the spell cooldown overlay.
///
/// Lock order is grid first, then cooldowns.
pub struct SpellTracker {
    client: DataClient,
    grid: RwLock<SpellSlotGrid>,
    cooldowns: Mutex<CooldownTable>,
}

impl SpellTracker {
    pub fn new(client: DataClient) -> Self {
        Self {
            client,
            grid: RwLock::new(SpellSlotGrid::default()),
            cooldowns: Mutex::new(CooldownTable::new()),
        }
    }

    /// Pull the grid from the data client.
    ///
    /// The grid is only replaced when the participants changed, which keeps
    /// any reordering the user did. Returns whether it was replaced.
    pub async fn refresh_grid(&self) -> ClientResult<bool> {
        let fetched = self.client.get_summoner_spells().await?;
        let mut grid = self.grid.write().await;
        if grid.same_participants(&fetched) {
            return Ok(false);
        }

        info!("Spell grid replaced ({} rows)", fetched.len());
        *grid = fetched;
        self.cooldowns.lock().await.clear();
        Ok(true)
    }

    pub async fn grid(&self) -> SpellSlotGrid {
        self.grid.read().await.clone()
    }

    pub async fn cooldowns(&self) -> CooldownTable {
        self.cooldowns.lock().await.clone()
    }

    /// Mark a spell as used. `Ok(None)` when it has no cooldown to track.
    pub async fn cast(&self, row: usize, slot: SpellSlot) -> Result<Option<u32>, GridError> {
        let grid = self.grid.read().await;
        let spell_id = grid.spell_at(row, slot).ok_or(GridError::RowOutOfRange {
            index: row,
            len: grid.len(),
        })?;

        let applied = self.cooldowns.lock().await.activate(row, slot, spell_id);
        match applied {
            Some(seconds) => debug!("Cooldown {}s started on row {} {}", seconds, row, slot),
            None => debug!("Spell {} on row {} has no cooldown", spell_id, row),
        }
        Ok(applied)
    }

    /// Swap two rows; running cooldowns move along with them
    pub async fn swap_rows(&self, a: usize, b: usize) -> Result<(), GridError> {
        let mut grid = self.grid.write().await;
        grid.swap_rows(a, b)?;
        self.cooldowns.lock().await.swap_rows(a, b);
        Ok(())
    }

    pub async fn tick(&self) {
        self.cooldowns.lock().await.tick();
    }

    /// One shared ticker for every cooldown entry
    pub fn start_ticker(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(TICK);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                self.tick().await;
            }
        })
    }

    /// Refresh the grid now and then every `every`
    pub fn start_refresh(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        info!(
            "Starting spell grid refresh (interval: {} seconds)",
            every.as_secs()
        );

        tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if let Err(e) = self.refresh_grid().await {
                    warn!("Spell grid refresh failed: {}", e);
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BrowserBackend, LocalFallbackProvider, LocalStore, mock};
    use tempfile::TempDir;

    async fn tracker(dir: &TempDir) -> Arc<SpellTracker> {
        let provider = LocalFallbackProvider::new(LocalStore::new(dir.path()));
        let client = DataClient::new(Arc::new(BrowserBackend::new(provider, "http://cdn")));
        let tracker = Arc::new(SpellTracker::new(client));
        assert!(tracker.refresh_grid().await.unwrap());
        tracker
    }

    #[tokio::test]
    async fn test_cast_uses_spell_in_slot() {
        let dir = TempDir::new().unwrap();
        let tracker = tracker(&dir).await;

        // Row 0 of the mock grid is Flash + Heal
        assert_eq!(tracker.cast(0, SpellSlot::First).await.unwrap(), Some(300));
        assert_eq!(tracker.cast(0, SpellSlot::Second).await.unwrap(), Some(240));
        assert_eq!(
            tracker.cast(7, SpellSlot::First).await.unwrap_err(),
            GridError::RowOutOfRange { index: 7, len: 5 }
        );
        assert_eq!(tracker.cooldowns().await.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_keeps_user_order() {
        let dir = TempDir::new().unwrap();
        let tracker = tracker(&dir).await;
        tracker.cast(0, SpellSlot::First).await.unwrap();

        tracker.swap_rows(0, 4).await.unwrap();
        let swapped = tracker.grid().await;

        assert!(!tracker.refresh_grid().await.unwrap());
        assert_eq!(tracker.grid().await, swapped);
        assert_ne!(swapped, mock::mock_spell_grid());
        assert_eq!(tracker.cooldowns().await.remaining(4, SpellSlot::First), Some(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_counts_down() {
        let dir = TempDir::new().unwrap();
        let tracker = tracker(&dir).await;
        tracker.cast(2, SpellSlot::First).await.unwrap(); // Smite, 90s

        let handle = tracker.clone().start_ticker();
        tokio::time::sleep(Duration::from_millis(30_500)).await;
        assert_eq!(tracker.cooldowns().await.remaining(2, SpellSlot::First), Some(60));

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(tracker.cooldowns().await.is_empty());

        handle.abort();
    }
}
