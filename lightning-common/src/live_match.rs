//! In-progress match as reported by the game client's spectator endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatch {
    pub game_id: u64,
    #[serde(default)]
    pub map_id: u32,
    pub game_mode: String,
    #[serde(default)]
    pub game_type: String,
    #[serde(default)]
    pub game_queue_config_id: u32,
    pub participants: Vec<LiveParticipant>,
    #[serde(default)]
    pub platform_id: String,
    #[serde(default)]
    pub banned_champions: Vec<BannedChampion>,
    #[serde(default)]
    pub game_start_time: u64,
    /// Game clock in seconds; the host reports a negative value while the game is in progress
    pub game_length: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveParticipant {
    pub puuid: String,
    /// 100 for blue side, 200 for red side
    pub team_id: u32,
    pub spell1_id: u32,
    pub spell2_id: u32,
    pub champion_id: u32,
    #[serde(default)]
    pub profile_icon_id: u32,
    #[serde(default)]
    pub riot_id: String,
    #[serde(default)]
    pub bot: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perks: Option<Perks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perks {
    pub perk_ids: Vec<u32>,
    pub perk_style: u32,
    pub perk_sub_style: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannedChampion {
    /// -1 when the pick turn had no ban
    pub champion_id: i32,
    pub team_id: u32,
    pub pick_turn: u32,
}

impl LiveMatch {
    /// Check if the game is in progress (negative length)
    pub fn is_active(&self) -> bool {
        self.game_length < 0
    }

    pub fn find_participant(&self, puuid: &str) -> Option<&LiveParticipant> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }

    /// Participants on the other side of the given player
    pub fn enemy_team(&self, puuid: &str) -> Vec<&LiveParticipant> {
        match self.find_participant(puuid) {
            Some(player) => {
                let enemy_team_id = if player.team_id == 100 { 200 } else { 100 };
                self.participants
                    .iter()
                    .filter(|p| p.team_id == enemy_team_id)
                    .collect()
            }
            None => Vec::new(),
        }
    }
}
