//! Settings page state with write-through persistence.
//!
//! Every edit is saved immediately. The held value only changes once the save
//! succeeded, so a failed write leaves the previous settings in place.

use tokio::sync::RwLock;
use tracing::info;

use lightning_common::{AppSettings, Credentials, SettingToggle};

use crate::error::ClientResult;
use crate::facade::DataClient;

pub struct SettingsController {
    client: DataClient,
    current: RwLock<AppSettings>,
}

impl SettingsController {
    pub fn new(client: DataClient, settings: AppSettings) -> Self {
        Self {
            client,
            current: RwLock::new(settings),
        }
    }

    /// Load settings from whichever store the environment uses
    pub async fn load(client: DataClient) -> ClientResult<Self> {
        let settings = client.load_settings().await?;
        Ok(Self::new(client, settings))
    }

    pub async fn current(&self) -> AppSettings {
        self.current.read().await.clone()
    }

    pub async fn toggle(&self, toggle: SettingToggle) -> ClientResult<AppSettings> {
        self.commit(|settings| settings.toggled(toggle)).await
    }

    pub async fn toggle_overlay(&self, name: &str) -> ClientResult<AppSettings> {
        self.commit(|settings| settings.overlay_toggled(name)).await
    }

    pub async fn set_credentials(&self, credentials: Credentials) -> ClientResult<AppSettings> {
        self.commit(|settings| AppSettings {
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            ..settings.clone()
        })
        .await
    }

    async fn commit<F>(&self, edit: F) -> ClientResult<AppSettings>
    where
        F: FnOnce(&AppSettings) -> AppSettings,
    {
        // Held across the save so concurrent edits apply one after another
        let mut current = self.current.write().await;
        let candidate = edit(&*current);
        self.client.save_settings(&candidate).await?;

        info!("Settings saved");
        *current = candidate.clone();
        Ok(candidate)
    }
}
