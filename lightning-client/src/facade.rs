//! Single entry point the presentation layer calls for data.
//!
//! Read paths never fail: any error on the way to the dashboard is logged and
//! the mock snapshot is served instead. Write paths propagate their errors.

use std::sync::Arc;

use lightning_common::{AppSettings, DashboardSnapshot, LiveMatch, SpellSlotGrid};

use crate::backend::{
    BrowserBackend, DataBackend, LocalFallbackProvider, LocalStore, NativeBackend, mock,
};
use crate::bridge::{BackendInvoker, GrpcInvoker, Invoker};
use crate::config::ClientConfig;
use crate::environment::{self, HostEnvironment};
use crate::error::{ClientError, ClientResult};

#[derive(Clone)]
pub struct DataClient {
    backend: Arc<dyn DataBackend>,
}

impl DataClient {
    pub fn new(backend: Arc<dyn DataBackend>) -> Self {
        Self { backend }
    }

    /// Pick the backend for the detected environment
    pub fn from_config(config: &ClientConfig, environment: HostEnvironment) -> anyhow::Result<Self> {
        let backend: Arc<dyn DataBackend> = match environment {
            HostEnvironment::Native => {
                let url = environment::bridge_url_override().unwrap_or_else(|| config.bridge.url.clone());
                let transport: Arc<dyn Invoker> =
                    Arc::new(GrpcInvoker::connect_lazy(&url, config.bridge.connect_timeout())?);
                tracing::info!("Using native backend at {}", url);
                let invoker = BackendInvoker::new(environment, Some(transport));
                Arc::new(NativeBackend::new(Arc::new(invoker)))
            }
            HostEnvironment::Browser => {
                tracing::info!("Using browser backend, storage in {:?}", config.storage.dir);
                let store = LocalStore::new(&config.storage.dir);
                Arc::new(BrowserBackend::new(
                    LocalFallbackProvider::new(store),
                    config.assets_cdn.clone(),
                ))
            }
        };
        Ok(Self::new(backend))
    }

    pub fn environment(&self) -> HostEnvironment {
        self.backend.environment()
    }

    /// Dashboard for a summoner, or for the logged-in one when `None`.
    ///
    /// Always resolves; failures substitute the mock snapshot.
    pub async fn get_dashboard_data(&self, summoner_name: Option<&str>) -> DashboardSnapshot {
        match self.fetch_dashboard(summoner_name).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Dashboard fetch failed, serving mock data: {}", e);
                mock::mock_snapshot()
            }
        }
    }

    async fn fetch_dashboard(&self, summoner_name: Option<&str>) -> ClientResult<DashboardSnapshot> {
        let name = match summoner_name {
            Some(name) => name.to_string(),
            None => self.backend.current_summoner().await?,
        };
        if name.trim().is_empty() {
            return Err(ClientError::NoActiveSummoner);
        }
        tracing::debug!("Fetching dashboard for {}", name);
        self.backend.dashboard(&name).await
    }

    /// Default settings with the stored credentials merged in.
    ///
    /// Nothing stored yet resolves with empty credentials.
    pub async fn load_settings(&self) -> ClientResult<AppSettings> {
        let credentials = self.backend.load_credentials().await?;
        Ok(AppSettings::with_credentials(credentials))
    }

    /// Persist the credential fields of `settings`
    pub async fn save_settings(&self, settings: &AppSettings) -> ClientResult<()> {
        self.backend
            .save_credentials(&settings.credentials())
            .await
            .inspect_err(|e| tracing::error!("Saving settings failed: {}", e))
    }

    pub async fn get_summoner_spells(&self) -> ClientResult<SpellSlotGrid> {
        self.backend.summoner_spells().await
    }

    pub async fn get_current_match(&self) -> ClientResult<Option<LiveMatch>> {
        self.backend.current_match().await
    }

    pub async fn get_image_path(&self, subfolder: &str, name: &str) -> ClientResult<String> {
        self.backend.image_path(subfolder, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lightning_common::Credentials;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn browser_client(dir: &TempDir) -> DataClient {
        let provider = LocalFallbackProvider::new(LocalStore::new(dir.path()));
        DataClient::new(Arc::new(BrowserBackend::new(provider, "http://cdn")))
    }

    /// Host that fails every operation
    struct FailingInvoker;

    #[async_trait]
    impl Invoker for FailingInvoker {
        async fn invoke(&self, operation: &str, _args: Value) -> ClientResult<Value> {
            Err(ClientError::operation(operation, "game client not running"))
        }
    }

    /// Host answering with fixed values, recording the operations it saw
    struct FixedInvoker {
        summoner: Value,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Invoker for FixedInvoker {
        async fn invoke(&self, operation: &str, _args: Value) -> ClientResult<Value> {
            self.seen.lock().unwrap().push(operation.to_string());
            match operation {
                "get_current_summoner" => Ok(self.summoner.clone()),
                "get_dashboard_data" => {
                    let mut snapshot = mock::mock_snapshot();
                    snapshot.summoner.display_name = "FromHost".to_string();
                    Ok(serde_json::to_value(snapshot).unwrap())
                }
                _ => Err(ClientError::operation(operation, "unexpected")),
            }
        }
    }

    fn native_client(invoker: impl Invoker + 'static) -> DataClient {
        let transport: Arc<dyn Invoker> = Arc::new(invoker);
        let guarded = BackendInvoker::new(HostEnvironment::Native, Some(transport));
        DataClient::new(Arc::new(NativeBackend::new(Arc::new(guarded))))
    }

    #[tokio::test]
    async fn test_browser_dashboard_is_mock() {
        let dir = TempDir::new().unwrap();
        let client = browser_client(&dir);

        assert_eq!(client.get_dashboard_data(None).await, mock::mock_snapshot());
        assert_eq!(client.get_dashboard_data(Some("Someone")).await, mock::mock_snapshot());
    }

    #[tokio::test]
    async fn test_native_failure_serves_mock() {
        let client = native_client(FailingInvoker);

        assert_eq!(client.get_dashboard_data(Some("Faker")).await, mock::mock_snapshot());
        assert_eq!(client.get_dashboard_data(None).await, mock::mock_snapshot());
    }

    #[tokio::test]
    async fn test_native_resolves_current_summoner_first() {
        let invoker = Arc::new(FixedInvoker {
            summoner: json!("Faker"),
            seen: Mutex::new(Vec::new()),
        });
        let transport: Arc<dyn Invoker> = invoker.clone();
        let guarded = BackendInvoker::new(HostEnvironment::Native, Some(transport));
        let client = DataClient::new(Arc::new(NativeBackend::new(Arc::new(guarded))));

        let snapshot = client.get_dashboard_data(None).await;

        assert_eq!(snapshot.summoner.display_name, "FromHost");
        assert_eq!(
            *invoker.seen.lock().unwrap(),
            vec!["get_current_summoner".to_string(), "get_dashboard_data".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_summoner_is_no_active_summoner() {
        let client = native_client(FixedInvoker {
            summoner: json!(""),
            seen: Mutex::new(Vec::new()),
        });

        let err = client.fetch_dashboard(None).await.unwrap_err();
        assert!(matches!(err, ClientError::NoActiveSummoner));
        // The public read path still resolves
        assert_eq!(client.get_dashboard_data(None).await, mock::mock_snapshot());
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let dir = TempDir::new().unwrap();
        let client = browser_client(&dir);

        let loaded = client.load_settings().await.unwrap();
        assert_eq!(loaded.credentials(), Credentials::default());

        let edited = AppSettings {
            client_id: "id-123".to_string(),
            client_secret: "secret-456".to_string(),
            ..loaded
        };
        client.save_settings(&edited).await.unwrap();
        let reloaded = client.load_settings().await.unwrap();
        assert_eq!(reloaded.credentials(), edited.credentials());

        client.save_settings(&reloaded).await.unwrap();
        assert_eq!(client.load_settings().await.unwrap().credentials(), edited.credentials());
    }

    #[tokio::test]
    async fn test_native_save_failure_propagates() {
        let client = native_client(FailingInvoker);

        let err = client.save_settings(&AppSettings::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::OperationError { .. }));
    }

    #[tokio::test]
    async fn test_guarded_invoker_outside_native_host() {
        let transport: Arc<dyn Invoker> = Arc::new(FailingInvoker);
        let guarded = BackendInvoker::new(HostEnvironment::Browser, Some(transport));
        let client = DataClient::new(Arc::new(NativeBackend::new(Arc::new(guarded))));

        let err = client.load_settings().await.unwrap_err();
        assert!(matches!(err, ClientError::BridgeUnavailable));
    }

    #[tokio::test]
    async fn test_browser_image_path_uses_cdn() {
        let dir = TempDir::new().unwrap();
        let client = browser_client(&dir);

        let url = client.get_image_path("img/spell", "SummonerFlash").await.unwrap();
        assert_eq!(url, "http://cdn/img/spell/SummonerFlash.png");
    }
}
