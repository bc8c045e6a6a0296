//! Interactive session: runs parsed commands against the live components and
//! renders their results as text.

use std::fmt::Write;
use std::sync::Arc;

use chrono::Local;

use lightning_common::{
    AppSettings, Credentials, DashboardSnapshot, SettingToggle, SpellSlot, spell_info,
};

use crate::cache::{PollingCache, cache_key};
use crate::command::{Command, USAGE};
use crate::error::ClientResult;
use crate::settings::SettingsController;
use crate::tracker::{CooldownTable, SpellTracker};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub struct Session {
    dashboard: Arc<PollingCache<DashboardSnapshot>>,
    tracker: Arc<SpellTracker>,
    settings: SettingsController,
    default_summoner: Option<String>,
}

impl Session {
    pub fn new(
        dashboard: Arc<PollingCache<DashboardSnapshot>>,
        tracker: Arc<SpellTracker>,
        settings: SettingsController,
        default_summoner: Option<String>,
    ) -> Self {
        Self {
            dashboard,
            tracker,
            settings,
            default_summoner,
        }
    }

    pub async fn run_line(&self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(command) => self.execute(command).await,
            Err(e) => Outcome::Continue(e.to_string()),
        }
    }

    pub async fn execute(&self, command: Command) -> Outcome {
        let output = match command {
            Command::Dashboard(name) => {
                let key = cache_key(name.as_deref().or(self.default_summoner.as_deref()));
                self.dashboard.set_active_key(key.clone()).await;
                let snapshot = self.dashboard.get(&key).await;
                self.render_dashboard(&key, &snapshot).await
            }
            Command::Refresh => {
                let key = match self.dashboard.active_key().await {
                    Some(key) => key,
                    None => cache_key(self.default_summoner.as_deref()),
                };
                let snapshot = self.dashboard.revalidate(&key).await;
                self.render_dashboard(&key, &snapshot).await
            }
            Command::Spells => {
                if let Err(e) = self.tracker.refresh_grid().await {
                    tracing::warn!("Spell grid refresh failed: {}", e);
                }
                self.render_spells().await
            }
            Command::Cast { row, slot } => match self.tracker.cast(row, slot).await {
                Ok(Some(seconds)) => format!("Row {} {} on cooldown for {}s", row, slot, seconds),
                Ok(None) => format!("Row {} {} has no cooldown", row, slot),
                Err(e) => e.to_string(),
            },
            Command::Swap { a, b } => match self.tracker.swap_rows(a, b).await {
                Ok(()) => self.render_spells().await,
                Err(e) => e.to_string(),
            },
            Command::Cooldowns => render_cooldowns(&self.tracker.cooldowns().await),
            Command::Settings => render_settings(&self.settings.current().await),
            Command::Toggle(toggle) => saved(self.settings.toggle(toggle).await),
            Command::Overlay(name) => saved(self.settings.toggle_overlay(&name).await),
            Command::Credentials {
                client_id,
                client_secret,
            } => saved(
                self.settings
                    .set_credentials(Credentials::new(client_id, client_secret))
                    .await,
            ),
            Command::Help => USAGE.to_string(),
            Command::Quit => return Outcome::Quit,
        };
        Outcome::Continue(output)
    }

    async fn render_dashboard(&self, key: &str, snapshot: &DashboardSnapshot) -> String {
        let mut out = String::new();
        let summoner = &snapshot.summoner;
        let _ = writeln!(
            out,
            "{} (level {}) - {}",
            summoner.display_name,
            summoner.level,
            summoner.ranked_summary()
        );
        let _ = writeln!(
            out,
            "Win rate {:.0}% | {} | main {}",
            summoner.win_rate, summoner.favorite_role, summoner.main_champion
        );
        if let Some(recent) = snapshot.win_rate_recent() {
            let _ = writeln!(out, "Recent matches: {:.0}% won", recent);
        }
        for m in &snapshot.matches {
            let _ = writeln!(
                out,
                "  {:<8} {:<10} {:>8}  {}  {} cs  {}",
                m.result.as_str(), m.champion, m.kda, m.duration, m.cs, m.timestamp
            );
        }
        for mastery in &snapshot.champion_mastery {
            let _ = writeln!(
                out,
                "  {} M{} {} pts",
                mastery.name, mastery.level, mastery.points
            );
        }
        let _ = write!(
            out,
            "{} games, average {}",
            snapshot.stats.total_games, snapshot.stats.avg_game_time
        );
        if let Some(cached) = self.dashboard.peek(key).await {
            let _ = write!(
                out,
                "\nUpdated {}",
                cached.updated_at.with_timezone(&Local).format("%H:%M:%S")
            );
        }
        out
    }

    async fn render_spells(&self) -> String {
        let grid = self.tracker.grid().await;
        if grid.is_empty() {
            return "No match in progress".to_string();
        }
        let cooldowns = self.tracker.cooldowns().await;
        let mut out = String::new();
        for (index, row) in grid.rows().iter().enumerate() {
            let _ = write!(out, "{}: champion {:<4}", index, row.champion_id);
            for slot in [SpellSlot::First, SpellSlot::Second] {
                let spell_id = row.spell(slot);
                let name = spell_info(spell_id).map_or("Unknown", |spell| spell.name);
                match cooldowns.remaining(index, slot) {
                    Some(seconds) => {
                        let _ = write!(out, "  {} ({}s)", name, seconds);
                    }
                    None => {
                        let _ = write!(out, "  {} (ready)", name);
                    }
                }
            }
            out.push('\n');
        }
        out.pop();
        out
    }
}

fn saved(result: ClientResult<AppSettings>) -> String {
    match result {
        Ok(settings) => render_settings(&settings),
        Err(e) => format!("Failed to save settings, nothing changed: {}", e),
    }
}

fn render_cooldowns(table: &CooldownTable) -> String {
    if table.is_empty() {
        return "All spells ready".to_string();
    }
    table
        .iter()
        .map(|(key, remaining)| format!("{}: {}s", key, remaining))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_settings(settings: &AppSettings) -> String {
    let mut out = String::new();
    for toggle in [SettingToggle::AutoStart, SettingToggle::Notifications] {
        let _ = writeln!(out, "{}: {}", toggle, settings.flag(toggle));
    }
    for (name, enabled) in &settings.overlays {
        let _ = writeln!(out, "overlay {}: {}", name, enabled);
    }
    let secret = if settings.client_secret.is_empty() {
        "(not set)"
    } else {
        "********"
    };
    let _ = write!(
        out,
        "clientId: {}\nclientSecret: {}",
        settings.client_id, secret
    );
    out
}
