use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::assets::DEFAULT_ASSETS_CDN;

/// Variable overriding the configuration file location
pub const CONFIG_PATH_VAR: &str = "LIGHTNING_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default = "default_bridge_url")]
    pub url: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the local key-value store
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_stale_after")]
    pub stale_after_secs: u64,

    #[serde(default = "default_revalidate_interval")]
    pub revalidate_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_spell_refresh")]
    pub spell_refresh_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Summoner shown when the dashboard is opened without a name
    #[serde(default)]
    pub summoner: Option<String>,

    #[serde(default = "default_assets_cdn")]
    pub assets_cdn: String,

    #[serde(default)]
    pub bridge: BridgeConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub tracker: TrackerConfig,
}

fn default_bridge_url() -> String {
    "http://127.0.0.1:50051".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_stale_after() -> u64 {
    120
}

fn default_revalidate_interval() -> u64 {
    15
}

fn default_spell_refresh() -> u64 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_assets_cdn() -> String {
    DEFAULT_ASSETS_CDN.to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            url: default_bridge_url(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_after_secs: default_stale_after(),
            revalidate_interval_secs: default_revalidate_interval(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            spell_refresh_secs: default_spell_refresh(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            summoner: None,
            assets_cdn: default_assets_cdn(),
            bridge: BridgeConfig::default(),
            storage: StorageConfig::default(),
            cache: CacheConfig::default(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl BridgeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl CacheConfig {
    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }

    pub fn revalidate_interval(&self) -> Duration {
        Duration::from_secs(self.revalidate_interval_secs)
    }
}

impl TrackerConfig {
    pub fn spell_refresh(&self) -> Duration {
        Duration::from_secs(self.spell_refresh_secs)
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: ClientConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }
}

pub static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Load the process-wide configuration.
///
/// A missing file means defaults; a file that exists but does not parse is
/// an error.
pub fn read_config() -> anyhow::Result<&'static ClientConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = if Path::new(&path).exists() {
        ClientConfig::from_file(&path)?
    } else {
        // Logging is not up yet at this point
        eprintln!("Config file {} not found, using defaults", path);
        ClientConfig::default()
    };

    Ok(CONFIG.get_or_init(|| config))
}
