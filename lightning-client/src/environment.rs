//! Detection of the hosting context.
//!
//! The desktop shell injects marker variables into the process environment
//! before starting the client. Their presence means a native bridge is
//! reachable; without any of them the client runs browser-hosted and serves
//! local data only.

use std::sync::OnceLock;

/// Variable carrying the bridge endpoint; also counts as a marker
pub const BRIDGE_URL_VAR: &str = "LIGHTNING_BRIDGE_URL";

/// Marker variables injected by the hosting shell
pub const BRIDGE_MARKERS: &[&str] = &[
    BRIDGE_URL_VAR,
    "TAURI_IPC",
    "TAURI_INTERNALS",
    "TAURI_METADATA",
    "TAURI",
];

static DETECTED: OnceLock<HostEnvironment> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEnvironment {
    /// Inside the desktop shell, with a privileged backend bridge
    Native,
    /// Plain client without a bridge, backed by local storage and mocks
    Browser,
}

impl HostEnvironment {
    /// Classify an environment given a variable lookup.
    ///
    /// A marker only counts when it is set to a non-empty value.
    pub fn detect_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let has_marker = BRIDGE_MARKERS
            .iter()
            .any(|name| lookup(name).is_some_and(|value| !value.trim().is_empty()));

        if has_marker {
            HostEnvironment::Native
        } else {
            HostEnvironment::Browser
        }
    }

    /// Environment of this process, evaluated once on first use
    pub fn current() -> Self {
        *DETECTED.get_or_init(|| {
            let detected = Self::detect_with(|name| std::env::var(name).ok());
            tracing::info!("Host environment detected: {}", detected);
            detected
        })
    }

    pub fn is_native(&self) -> bool {
        matches!(self, HostEnvironment::Native)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostEnvironment::Native => "native",
            HostEnvironment::Browser => "browser",
        }
    }
}

impl std::fmt::Display for HostEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bridge endpoint injected by the shell, if any
pub fn bridge_url_override() -> Option<String> {
    std::env::var(BRIDGE_URL_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
}
