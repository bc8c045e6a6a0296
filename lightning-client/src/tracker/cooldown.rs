//! Per-slot summoner spell cooldowns.
//!
//! A missing key means the spell is ready. Entries count down in whole
//! seconds and are removed when they reach zero, so no entry is ever zero or
//! negative.

use std::collections::BTreeMap;
use std::fmt;

use lightning_common::{SpellSlot, spell_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CooldownKey {
    pub row: usize,
    pub slot: SpellSlot,
}

impl CooldownKey {
    pub fn new(row: usize, slot: SpellSlot) -> Self {
        Self { row, slot }
    }
}

impl fmt::Display for CooldownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.slot)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooldownTable {
    entries: BTreeMap<CooldownKey, u32>,
}

impl CooldownTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a slot on cooldown for the duration of `spell_id`.
    ///
    /// Returns the duration applied, or `None` when the spell is unknown or
    /// has no cooldown (the table is left untouched). Activating a slot that
    /// is already cooling down restarts it.
    pub fn activate(&mut self, row: usize, slot: SpellSlot, spell_id: u32) -> Option<u32> {
        let duration = spell_info(spell_id)
            .map(|spell| spell.cooldown)
            .filter(|cooldown| *cooldown > 0)?;
        self.entries.insert(CooldownKey::new(row, slot), duration);
        Some(duration)
    }

    /// Advance every entry by one second, dropping those that finish
    pub fn tick(&mut self) {
        self.entries.retain(|_, remaining| {
            *remaining -= 1;
            *remaining > 0
        });
    }

    pub fn remaining(&self, row: usize, slot: SpellSlot) -> Option<u32> {
        self.entries.get(&CooldownKey::new(row, slot)).copied()
    }

    /// Follow a row swap in the grid so timers stay with their champion
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let entries = std::mem::take(&mut self.entries);
        self.entries = entries
            .into_iter()
            .map(|(key, remaining)| {
                let row = match key.row {
                    r if r == a => b,
                    r if r == b => a,
                    r => r,
                };
                (CooldownKey::new(row, key.slot), remaining)
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CooldownKey, &u32)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
