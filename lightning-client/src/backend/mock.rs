//! Placeholder data shown when the native host is unreachable.
//!
//! Values are fixed so that screenshots and tests stay stable.

use lightning_common::{
    ChampionMasteryEntry, DashboardSnapshot, DashboardStats, LiveMatch, LiveParticipant,
    MatchDetails, MatchParticipant, MatchResult, MatchSummary, RankedEntry, SpellSlotGrid,
    SummonerProfile,
};

pub const MOCK_SUMMONER_NAME: &str = "RiftMaster2024";
pub const MOCK_IMAGE_PATH: &str = "assets";

/// Team shown in the spell tracker
pub const TRACKED_TEAM_ID: u32 = 100;

fn participant(
    summoner_name: &str,
    champion_name: &str,
    kills: u32,
    deaths: u32,
    assists: u32,
) -> MatchParticipant {
    MatchParticipant {
        summoner_name: summoner_name.to_string(),
        champion_name: champion_name.to_string(),
        kills,
        deaths,
        assists,
        lane: "BOTTOM".to_string(),
        item0: 1055,
        item1: 3006,
        item2: 3085,
        item3: 3094,
        item4: 3031,
        item5: 3072,
        item6: 3363,
        total_minions_killed: 200,
        total_damage_dealt_to_champions: 25000,
    }
}

fn mock_match_details() -> MatchDetails {
    MatchDetails {
        teams: [
            [
                participant("Blue1", "Jinx", 12, 3, 7),
                participant("Blue2", "Thresh", 1, 5, 15),
                participant("Blue3", "LeeSin", 6, 7, 8),
                participant("Blue4", "Ahri", 9, 4, 10),
                participant("Blue5", "Shen", 3, 6, 12),
            ],
            [
                participant("Red1", "Caitlyn", 8, 6, 4),
                participant("Red2", "Lux", 5, 8, 9),
                participant("Red3", "Vi", 7, 9, 6),
                participant("Red4", "Yasuo", 10, 10, 5),
                participant("Red5", "Darius", 4, 7, 3),
            ],
        ],
        towers_destroyed: [8, 3],
        inhibitors_destroyed: [2, 0],
        gold_earned: [65000, 54000],
        team_kda: [[31, 25, 52], [34, 31, 27]],
    }
}

fn match_summary(
    game_id: u64,
    champion: &str,
    result: MatchResult,
    kda: &str,
    duration: &str,
    timestamp: &str,
    cs: u32,
) -> MatchSummary {
    MatchSummary {
        match_id: format!("EUW1_{game_id}"),
        game_id,
        champion: champion.to_string(),
        result,
        kda: kda.to_string(),
        duration: duration.to_string(),
        game_mode: "Ranked Solo".to_string(),
        timestamp: timestamp.to_string(),
        cs,
        match_details: Some(mock_match_details()),
    }
}

fn mastery(name: &str, level: u8, points: u32) -> ChampionMasteryEntry {
    ChampionMasteryEntry {
        icon: 11,
        name: name.to_string(),
        level,
        points,
    }
}

pub fn mock_summoner() -> SummonerProfile {
    SummonerProfile {
        display_name: MOCK_SUMMONER_NAME.to_string(),
        level: 87,
        profile_icon_id: 4371,
        profile_icon_path: "assets/profileIcons/4371.png".to_string(),
        rank: RankedEntry {
            league_id: "12345".to_string(),
            puuid: "mock-puuid".to_string(),
            queue_type: "RANKED_SOLO_5x5".to_string(),
            tier: "GOLD".to_string(),
            rank: "II".to_string(),
            league_points: 64,
            wins: 73,
            losses: 27,
            hot_streak: false,
            veteran: false,
            fresh_blood: true,
            inactive: false,
            mini_series: None,
        },
        win_rate: 73.0,
        recent_games: 15,
        favorite_role: "ADC".to_string(),
        main_champion: "Jinx".to_string(),
    }
}

pub fn mock_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        summoner: mock_summoner(),
        matches: vec![
            match_summary(
                1234567890,
                "Jinx",
                MatchResult::Victory,
                "12/3/7",
                "28:45",
                "2 hours ago",
                287,
            ),
            match_summary(
                1234567891,
                "Caitlyn",
                MatchResult::Defeat,
                "8/6/4",
                "35:12",
                "4 hours ago",
                245,
            ),
        ],
        champion_mastery: vec![
            mastery("Jinx", 7, 284750),
            mastery("Caitlyn", 6, 167432),
            mastery("Vayne", 5, 89234),
            mastery("Ezreal", 4, 45678),
        ],
        stats: DashboardStats {
            total_games: 156,
            avg_game_time: "31:24".to_string(),
        },
        image_path: MOCK_IMAGE_PATH.to_string(),
    }
}

fn live_participant(index: usize, team_id: u32, champion_id: u32, spells: (u32, u32)) -> LiveParticipant {
    LiveParticipant {
        puuid: format!("mock-puuid-{index}"),
        team_id,
        spell1_id: spells.0,
        spell2_id: spells.1,
        champion_id,
        profile_icon_id: 4371,
        riot_id: format!("Player{index}#EUW"),
        bot: false,
        perks: None,
    }
}

/// A ranked game 15 minutes in
pub fn mock_live_match() -> LiveMatch {
    let roster = [
        (100, 222, (4, 7)),   // Jinx
        (100, 412, (4, 14)),  // Thresh
        (100, 64, (11, 4)),   // Lee Sin
        (100, 103, (4, 14)),  // Ahri
        (100, 98, (12, 4)),   // Shen
        (200, 51, (4, 7)),    // Caitlyn
        (200, 99, (4, 3)),    // Lux
        (200, 254, (11, 4)),  // Vi
        (200, 157, (4, 12)),  // Yasuo
        (200, 122, (6, 4)),   // Darius
    ];
    LiveMatch {
        game_id: 1234567892,
        map_id: 11,
        game_mode: "CLASSIC".to_string(),
        game_type: "MATCHED_GAME".to_string(),
        game_queue_config_id: 420,
        participants: roster
            .iter()
            .enumerate()
            .map(|(index, (team, champion, spells))| live_participant(index, *team, *champion, *spells))
            .collect(),
        platform_id: "EUW1".to_string(),
        banned_champions: Vec::new(),
        game_start_time: 0,
        game_length: 942,
    }
}

pub fn mock_spell_grid() -> SpellSlotGrid {
    SpellSlotGrid::from_match(&mock_live_match(), TRACKED_TEAM_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_snapshot_contents() {
        let snapshot = mock_snapshot();
        assert_eq!(snapshot.summoner.display_name, "RiftMaster2024");
        assert_eq!(snapshot.summoner.ranked_summary(), "GOLD II · 64 LP");
        assert_eq!(snapshot.matches.len(), 2);
        assert_eq!(snapshot.win_rate_recent(), Some(50.0));
        assert_eq!(snapshot.matches[0].match_id, "EUW1_1234567890");
        assert_eq!(snapshot.champion_mastery[0].points, 284750);
        assert_eq!(snapshot.stats.total_games, 156);
    }

    #[test]
    fn test_mock_grid_is_one_team() {
        let grid = mock_spell_grid();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid.row(0).map(|r| r.champion_id), Some(222));
    }
}
