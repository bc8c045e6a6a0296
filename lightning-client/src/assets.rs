use std::sync::OnceLock;

use regex::Regex;

/// Default prefix for static game assets when no native host serves them
pub const DEFAULT_ASSETS_CDN: &str = "https://ddragon.leagueoflegends.com/cdn/";

fn drive_letter() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z]:").expect("valid drive letter pattern"))
}

/// Join a base URL and a (possibly Windows-style) relative path.
///
/// Backslashes become `/`, a leading drive letter and leading `/` are
/// dropped, and exactly one `/` separates base and path.
pub fn asset_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let normalized = path.replace('\\', "/");
    let normalized = drive_letter().replace(&normalized, "");
    let relative = normalized.strip_prefix('/').unwrap_or(&normalized);
    format!("{}/{}", base, relative)
}
