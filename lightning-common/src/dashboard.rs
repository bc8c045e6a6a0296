//! Dashboard data as produced by the native host.
//!
//! A [`DashboardSnapshot`] is never edited in place: every successful fetch
//! produces a new one that replaces the previous value wholesale.

use serde::{Deserialize, Serialize};

use crate::types::MatchResult;

/// Everything the dashboard page renders for one summoner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub summoner: SummonerProfile,
    /// Most recent match first
    pub matches: Vec<MatchSummary>,
    pub champion_mastery: Vec<ChampionMasteryEntry>,
    pub stats: DashboardStats,
    /// Base path (or URL prefix) under which champion/spell images live
    pub image_path: String,
}

impl DashboardSnapshot {
    /// Share of wins among the listed matches, in percent.
    ///
    /// Returns `None` when the match list is empty.
    pub fn win_rate_recent(&self) -> Option<f64> {
        if self.matches.is_empty() {
            return None;
        }
        let wins = self.matches.iter().filter(|m| m.is_victory()).count();
        Some(wins as f64 * 100.0 / self.matches.len() as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerProfile {
    pub display_name: String,
    pub level: u32,
    #[serde(default)]
    pub profile_icon_id: u32,
    #[serde(default)]
    pub profile_icon_path: String,
    pub rank: RankedEntry,
    pub win_rate: f64,
    #[serde(default)]
    pub recent_games: u32,
    pub favorite_role: String,
    pub main_champion: String,
}

impl SummonerProfile {
    /// Short ranked line, e.g. "GOLD II · 64 LP"
    pub fn ranked_summary(&self) -> String {
        if self.rank.tier.is_empty() || self.rank.tier.eq_ignore_ascii_case("unranked") {
            return "Unranked".to_string();
        }
        format!(
            "{} {} · {} LP",
            self.rank.tier, self.rank.rank, self.rank.league_points
        )
    }
}

/// Ranked queue entry, mirrors the league-v4 entry shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    #[serde(default)]
    pub league_id: String,
    #[serde(default)]
    pub puuid: String,
    pub queue_type: String,
    pub tier: String,
    /// Division label ("I" to "IV")
    pub rank: String,
    pub league_points: i32,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_series: Option<MiniSeries>,
}

impl RankedEntry {
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniSeries {
    pub losses: u32,
    pub progress: String,
    pub target: u32,
    pub wins: u32,
}

/// One row of the match history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    /// Platform-prefixed match id, e.g. "EUW1_1234567890"
    pub match_id: String,
    pub game_id: u64,
    pub champion: String,
    pub result: MatchResult,
    /// "kills/deaths/assists"
    pub kda: String,
    /// "mm:ss"
    pub duration: String,
    pub game_mode: String,
    /// Relative label such as "2 hours ago"
    pub timestamp: String,
    pub cs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_details: Option<MatchDetails>,
}

impl MatchSummary {
    pub fn is_victory(&self) -> bool {
        self.result == MatchResult::Victory
    }
}

/// Expanded view of a match: both rosters and team aggregates.
///
/// Index 0 is the blue side, index 1 the red side, in every array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub teams: [[MatchParticipant; 5]; 2],
    pub towers_destroyed: [u32; 2],
    pub inhibitors_destroyed: [u32; 2],
    pub gold_earned: [u32; 2],
    /// Per team (kills, deaths, assists)
    pub team_kda: [[u32; 3]; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipant {
    pub summoner_name: String,
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub lane: String,
    pub item0: u32,
    pub item1: u32,
    pub item2: u32,
    pub item3: u32,
    pub item4: u32,
    pub item5: u32,
    pub item6: u32,
    pub total_minions_killed: u32,
    pub total_damage_dealt_to_champions: u32,
}

impl MatchParticipant {
    pub fn items(&self) -> [u32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryEntry {
    /// Champion id used to look up the icon
    pub icon: u32,
    pub name: String,
    /// Mastery level, 1 to 7
    pub level: u8,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_games: u32,
    pub avg_game_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(tier: &str) -> RankedEntry {
        RankedEntry {
            league_id: String::new(),
            puuid: String::new(),
            queue_type: "RANKED_SOLO_5x5".to_string(),
            tier: tier.to_string(),
            rank: "II".to_string(),
            league_points: 64,
            wins: 73,
            losses: 27,
            hot_streak: false,
            veteran: false,
            fresh_blood: true,
            inactive: false,
            mini_series: None,
        }
    }

    #[test]
    fn test_ranked_summary() {
        let mut profile = SummonerProfile {
            display_name: "RiftMaster2024".to_string(),
            level: 87,
            profile_icon_id: 0,
            profile_icon_path: String::new(),
            rank: ranked("GOLD"),
            win_rate: 73.0,
            recent_games: 15,
            favorite_role: "ADC".to_string(),
            main_champion: "Jinx".to_string(),
        };
        assert_eq!(profile.ranked_summary(), "GOLD II · 64 LP");
        assert_eq!(profile.rank.games(), 100);

        profile.rank = ranked("UNRANKED");
        assert_eq!(profile.ranked_summary(), "Unranked");
    }

    #[test]
    fn test_ranked_entry_tolerates_missing_flags() {
        let json = r#"{
            "queueType": "RANKED_SOLO_5x5",
            "tier": "SILVER",
            "rank": "IV",
            "leaguePoints": 12,
            "wins": 3,
            "losses": 5
        }"#;
        let entry: RankedEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.tier, "SILVER");
        assert!(!entry.hot_streak);
        assert!(entry.mini_series.is_none());
    }
}
