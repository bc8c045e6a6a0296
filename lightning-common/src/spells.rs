//! Summoner spell reference data and the spell slot grid of the overlay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::live_match::LiveMatch;
use crate::types::SpellSlot;

/// Static metadata of one summoner spell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellInfo {
    pub id: u32,
    pub name: &'static str,
    /// Cooldown in whole seconds, 0 when the spell has none
    pub cooldown: u32,
}

const SPELLS: &[SpellInfo] = &[
    SpellInfo { id: 1, name: "SummonerBoost", cooldown: 210 },
    SpellInfo { id: 3, name: "SummonerExhaust", cooldown: 210 },
    SpellInfo { id: 4, name: "SummonerFlash", cooldown: 300 },
    SpellInfo { id: 6, name: "SummonerHaste", cooldown: 210 },
    SpellInfo { id: 7, name: "SummonerHeal", cooldown: 240 },
    SpellInfo { id: 11, name: "SummonerSmite", cooldown: 90 },
    SpellInfo { id: 12, name: "SummonerTeleport", cooldown: 360 },
    SpellInfo { id: 13, name: "SummonerMana", cooldown: 240 },
    SpellInfo { id: 14, name: "SummonerDot", cooldown: 180 },
    SpellInfo { id: 21, name: "SummonerBarrier", cooldown: 180 },
    SpellInfo { id: 32, name: "SummonerSnowball", cooldown: 80 },
    SpellInfo { id: 54, name: "Summoner_UltBookPlaceholder", cooldown: 0 },
];

/// Look up a summoner spell by its numeric id
pub fn spell_info(id: u32) -> Option<&'static SpellInfo> {
    SPELLS.iter().find(|spell| spell.id == id)
}

/// One participant of the current match: (champion, first spell, second spell).
///
/// Serialized as a 3-element array, the shape the host sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32, u32)", into = "(u32, u32, u32)")]
pub struct SpellSlotRow {
    pub champion_id: u32,
    pub first_spell: u32,
    pub second_spell: u32,
}

impl SpellSlotRow {
    pub fn new(champion_id: u32, first_spell: u32, second_spell: u32) -> Self {
        Self {
            champion_id,
            first_spell,
            second_spell,
        }
    }

    pub fn spell(&self, slot: SpellSlot) -> u32 {
        match slot {
            SpellSlot::First => self.first_spell,
            SpellSlot::Second => self.second_spell,
        }
    }
}

impl From<(u32, u32, u32)> for SpellSlotRow {
    fn from((champion_id, first_spell, second_spell): (u32, u32, u32)) -> Self {
        Self::new(champion_id, first_spell, second_spell)
    }
}

impl From<SpellSlotRow> for (u32, u32, u32) {
    fn from(row: SpellSlotRow) -> Self {
        (row.champion_id, row.first_spell, row.second_spell)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {index} is out of range (grid has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

/// Ordered rows of the spell tracker.
///
/// Rows are only ever reordered by [`SpellSlotGrid::swap_rows`] or replaced
/// wholesale. The native backend rejects grids longer than
/// [`SpellSlotGrid::MAX_ROWS`], one row per participant of a full match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellSlotGrid {
    rows: Vec<SpellSlotRow>,
}

impl SpellSlotGrid {
    pub const MAX_ROWS: usize = 10;

    pub fn new(rows: Vec<SpellSlotRow>) -> Self {
        Self { rows }
    }

    /// Rows for the participants of one team, in match order
    pub fn from_match(live_match: &LiveMatch, team_id: u32) -> Self {
        let rows = live_match
            .participants
            .iter()
            .filter(|p| p.team_id == team_id)
            .map(|p| SpellSlotRow::new(p.champion_id, p.spell1_id, p.spell2_id))
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[SpellSlotRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SpellSlotRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Spell id at a given position, if the row exists
    pub fn spell_at(&self, index: usize, slot: SpellSlot) -> Option<u32> {
        self.rows.get(index).map(|row| row.spell(slot))
    }

    /// Exchange two rows; every other row stays where it is
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), GridError> {
        let len = self.rows.len();
        for index in [a, b] {
            if index >= len {
                return Err(GridError::RowOutOfRange { index, len });
            }
        }
        self.rows.swap(a, b);
        Ok(())
    }

    /// Whether both grids hold the same rows, ignoring their order
    pub fn same_participants(&self, other: &SpellSlotGrid) -> bool {
        if self.rows.len() != other.rows.len() {
            return false;
        }
        let mut mine = self.rows.clone();
        let mut theirs = other.rows.clone();
        mine.sort();
        theirs.sort();
        mine == theirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_table_lookup() {
        assert_eq!(spell_info(4).map(|s| s.cooldown), Some(300));
        assert_eq!(spell_info(4).map(|s| s.name), Some("SummonerFlash"));
        assert_eq!(spell_info(54).map(|s| s.cooldown), Some(0));
        assert!(spell_info(9999).is_none());
    }

    #[test]
    fn test_swap_first_and_last_row() {
        let a = SpellSlotRow::new(222, 4, 7);
        let b = SpellSlotRow::new(412, 4, 14);
        let c = SpellSlotRow::new(64, 11, 4);
        let mut grid = SpellSlotGrid::new(vec![a, b, c]);

        grid.swap_rows(0, 2).unwrap();

        assert_eq!(grid.rows(), &[c, b, a]);
    }

    #[test]
    fn test_swap_out_of_range_keeps_grid() {
        let mut grid = SpellSlotGrid::new(vec![SpellSlotRow::new(1, 4, 7)]);
        let before = grid.clone();

        let err = grid.swap_rows(0, 3).unwrap_err();

        assert_eq!(err, GridError::RowOutOfRange { index: 3, len: 1 });
        assert_eq!(grid, before);
    }

    #[test]
    fn test_grid_wire_shape() {
        let grid: SpellSlotGrid = serde_json::from_str("[[222,4,7],[412,4,14]]").unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.spell_at(1, SpellSlot::Second), Some(14));
        assert_eq!(serde_json::to_string(&grid).unwrap(), "[[222,4,7],[412,4,14]]");
    }

    #[test]
    fn test_same_participants_ignores_order() {
        let a = SpellSlotRow::new(222, 4, 7);
        let b = SpellSlotRow::new(412, 4, 14);
        let grid = SpellSlotGrid::new(vec![a, b]);

        assert!(grid.same_participants(&SpellSlotGrid::new(vec![b, a])));
        assert!(!grid.same_participants(&SpellSlotGrid::new(vec![a])));
        assert!(!grid.same_participants(&SpellSlotGrid::new(vec![a, SpellSlotRow::new(1, 4, 12)])));
    }
}
