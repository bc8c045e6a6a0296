//! Data backends: where the facade gets its data from.
//!
//! Exactly one backend is selected at startup from the detected host
//! environment and injected into the [`DataClient`](crate::facade::DataClient).

use async_trait::async_trait;

use lightning_common::{Credentials, DashboardSnapshot, LiveMatch, SpellSlotGrid};

use crate::environment::HostEnvironment;
use crate::error::ClientResult;

mod browser;
mod fallback;
pub mod mock;
mod native;

pub use browser::BrowserBackend;
pub use fallback::{LocalFallbackProvider, LocalStore};
pub use native::NativeBackend;

/// Operation names understood by the native host
pub mod ops {
    pub const GET_CURRENT_SUMMONER: &str = "get_current_summoner";
    pub const GET_DASHBOARD_DATA: &str = "get_dashboard_data";
    pub const LOAD_CREDENTIALS: &str = "load_credentials";
    pub const SAVE_CREDENTIALS: &str = "save_credentials";
    pub const GET_SUMMONER_SPELLS: &str = "get_summoner_spells";
    pub const GET_CURRENT_MATCH_DATA: &str = "get_current_match_data";
    pub const GET_IMAGE_PATH: &str = "get_image_path";
}

#[async_trait]
pub trait DataBackend: Send + Sync {
    fn environment(&self) -> HostEnvironment;

    /// Name of the summoner logged into the game client; empty when none
    async fn current_summoner(&self) -> ClientResult<String>;

    async fn dashboard(&self, summoner_name: &str) -> ClientResult<DashboardSnapshot>;

    async fn load_credentials(&self) -> ClientResult<Credentials>;

    async fn save_credentials(&self, credentials: &Credentials) -> ClientResult<()>;

    async fn summoner_spells(&self) -> ClientResult<SpellSlotGrid>;

    /// The in-progress match, `None` when no game is running
    async fn current_match(&self) -> ClientResult<Option<LiveMatch>>;

    async fn image_path(&self, subfolder: &str, name: &str) -> ClientResult<String>;
}
