//! Data model shared by every Lightning front end, plus the generated
//! contract of the native bridge.

pub mod dashboard;
pub mod live_match;
pub mod settings;
pub mod spells;
pub mod types;

pub mod proto {
    tonic::include_proto!("lightning.bridge");
}

pub use dashboard::{
    ChampionMasteryEntry, DashboardSnapshot, DashboardStats, MatchDetails, MatchParticipant,
    MatchSummary, MiniSeries, RankedEntry, SummonerProfile,
};
pub use live_match::{BannedChampion, LiveMatch, LiveParticipant, Perks};
pub use settings::{AppSettings, Credentials};
pub use spells::{GridError, SpellInfo, SpellSlotGrid, SpellSlotRow, spell_info};
pub use types::{MatchResult, SettingToggle, SpellSlot};
