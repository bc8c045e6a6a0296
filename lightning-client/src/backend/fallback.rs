use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use lightning_common::{Credentials, DashboardSnapshot};

use super::mock;
use crate::error::{ClientError, ClientResult};

/// File backing the key-value store
const STORAGE_FILE: &str = "local_storage.json";

pub const CLIENT_ID_KEY: &str = "clientId";
pub const CLIENT_SECRET_KEY: &str = "clientSecret";

/// Flat string key-value store persisted as one JSON object
pub struct LocalStore {
    storage_dir: PathBuf,
    // Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(storage_dir: P) -> Self {
        Self {
            storage_dir: storage_dir.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    fn storage_path(&self) -> PathBuf {
        self.storage_dir.join(STORAGE_FILE)
    }

    async fn ensure_storage_dir(&self) -> Result<()> {
        if !self.storage_dir.exists() {
            fs::create_dir_all(&self.storage_dir)
                .await
                .context("Failed to create storage directory")?;
            info!("Created storage directory: {:?}", self.storage_dir);
        }
        Ok(())
    }

    /// Load every entry; a missing file is an empty store
    pub async fn load_all(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_path();
        if !path.exists() {
            debug!("Storage file does not exist: {:?}", path);
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .context("Failed to read storage file")?;
        let entries = serde_json::from_str(&content).context("Failed to parse storage file")?;
        Ok(entries)
    }

    /// Write several entries in one go; other keys are preserved
    pub async fn set_items(&self, items: &[(&str, &str)]) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.ensure_storage_dir().await?;

        let mut entries = match self.load_all().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Discarding unreadable storage file: {:#}", e);
                BTreeMap::new()
            }
        };
        for (key, value) in items {
            entries.insert(key.to_string(), value.to_string());
        }

        let content =
            serde_json::to_string_pretty(&entries).context("Failed to serialize storage")?;
        // Write to a sibling file first so a crash never leaves half a document
        let tmp_path = self.storage_path().with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .context("Failed to write storage file")?;
        fs::rename(&tmp_path, self.storage_path())
            .await
            .context("Failed to replace storage file")?;

        debug!("Saved {} entries to local storage", entries.len());
        Ok(())
    }
}

/// Stands in for the native host when running without one
pub struct LocalFallbackProvider {
    store: LocalStore,
}

impl LocalFallbackProvider {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Stored credentials, empty strings for anything missing or unreadable
    pub async fn read_credentials(&self) -> Credentials {
        let entries = match self.store.load_all().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Local storage unreadable, using empty credentials: {:#}", e);
                return Credentials::default();
            }
        };
        let get = |key: &str| entries.get(key).cloned().unwrap_or_default();
        Credentials::new(get(CLIENT_ID_KEY), get(CLIENT_SECRET_KEY))
    }

    pub async fn write_credentials(&self, credentials: &Credentials) -> ClientResult<()> {
        self.store
            .set_items(&[
                (CLIENT_ID_KEY, credentials.client_id.as_str()),
                (CLIENT_SECRET_KEY, credentials.client_secret.as_str()),
            ])
            .await
            .map_err(|e| ClientError::StorageWriteFailure(format!("{:#}", e)))
    }

    pub fn mock_snapshot(&self) -> DashboardSnapshot {
        mock::mock_snapshot()
    }
}
