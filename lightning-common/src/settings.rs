//! Application settings.
//!
//! The overlay set is an open string-keyed map: its members have changed
//! between releases, so unknown names are kept instead of rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::SettingToggle;

/// Overlay toggles present in a fresh install
pub const DEFAULT_OVERLAYS: &[(&str, bool)] = &[("scoreboard", false), ("minimap", true)];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_true")]
    pub auto_start: bool,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_overlays")]
    pub overlays: BTreeMap<String, bool>,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

fn default_true() -> bool {
    true
}

fn default_overlays() -> BTreeMap<String, bool> {
    DEFAULT_OVERLAYS
        .iter()
        .map(|(name, enabled)| (name.to_string(), *enabled))
        .collect()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_start: default_true(),
            notifications: default_true(),
            overlays: default_overlays(),
            client_id: String::new(),
            client_secret: String::new(),
        }
    }
}

impl AppSettings {
    /// Default template with the given credentials merged in
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            ..Self::default()
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }

    pub fn flag(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::AutoStart => self.auto_start,
            SettingToggle::Notifications => self.notifications,
        }
    }

    /// Copy of these settings with one flag inverted
    pub fn toggled(&self, toggle: SettingToggle) -> Self {
        let mut next = self.clone();
        match toggle {
            SettingToggle::AutoStart => next.auto_start = !next.auto_start,
            SettingToggle::Notifications => next.notifications = !next.notifications,
        }
        next
    }

    /// Copy of these settings with one overlay inverted.
    ///
    /// An overlay that is not in the map yet counts as disabled, so toggling
    /// it adds it as enabled.
    pub fn overlay_toggled(&self, name: &str) -> Self {
        let mut next = self.clone();
        let enabled = next.overlays.get(name).copied().unwrap_or(false);
        next.overlays.insert(name.to_string(), !enabled);
        next
    }

    pub fn overlay_enabled(&self, name: &str) -> bool {
        self.overlays.get(name).copied().unwrap_or(false)
    }
}

/// The two strings that are actually persisted.
///
/// Stored as plain text by both stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.client_id.is_empty() && self.client_secret.is_empty()
    }
}
