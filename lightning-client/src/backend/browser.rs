use async_trait::async_trait;

use lightning_common::{Credentials, DashboardSnapshot, LiveMatch, SpellSlotGrid};

use super::{DataBackend, LocalFallbackProvider, mock};
use crate::assets::asset_url;
use crate::environment::HostEnvironment;
use crate::error::ClientResult;

/// Backend used without a native host: mock data plus local persistence
pub struct BrowserBackend {
    fallback: LocalFallbackProvider,
    assets_cdn: String,
}

impl BrowserBackend {
    pub fn new(fallback: LocalFallbackProvider, assets_cdn: impl Into<String>) -> Self {
        Self {
            fallback,
            assets_cdn: assets_cdn.into(),
        }
    }
}

#[async_trait]
impl DataBackend for BrowserBackend {
    fn environment(&self) -> HostEnvironment {
        HostEnvironment::Browser
    }

    async fn current_summoner(&self) -> ClientResult<String> {
        Ok(mock::MOCK_SUMMONER_NAME.to_string())
    }

    async fn dashboard(&self, _summoner_name: &str) -> ClientResult<DashboardSnapshot> {
        Ok(self.fallback.mock_snapshot())
    }

    async fn load_credentials(&self) -> ClientResult<Credentials> {
        Ok(self.fallback.read_credentials().await)
    }

    async fn save_credentials(&self, credentials: &Credentials) -> ClientResult<()> {
        self.fallback.write_credentials(credentials).await
    }

    async fn summoner_spells(&self) -> ClientResult<SpellSlotGrid> {
        Ok(mock::mock_spell_grid())
    }

    async fn current_match(&self) -> ClientResult<Option<LiveMatch>> {
        Ok(Some(mock::mock_live_match()))
    }

    async fn image_path(&self, subfolder: &str, name: &str) -> ClientResult<String> {
        Ok(asset_url(&self.assets_cdn, &format!("{subfolder}/{name}.png")))
    }
}
