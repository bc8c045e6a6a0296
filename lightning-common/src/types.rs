use serde::{Deserialize, Serialize};

/// Outcome of a finished match as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Victory,
    Defeat,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Victory => "Victory",
            MatchResult::Defeat => "Defeat",
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the two summoner spell slots of a participant.
///
/// The slot label is part of the cooldown key, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpellSlot {
    #[serde(rename = "spell1")]
    First,
    #[serde(rename = "spell2")]
    Second,
}

impl SpellSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpellSlot::First => "spell1",
            SpellSlot::Second => "spell2",
        }
    }
}

impl std::fmt::Display for SpellSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpellSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "d" and "f" are the default in-game key bindings
        match s.to_lowercase().as_str() {
            "spell1" | "1" | "d" => Ok(SpellSlot::First),
            "spell2" | "2" | "f" => Ok(SpellSlot::Second),
            _ => Err(format!("Unknown spell slot: {}", s)),
        }
    }
}

/// Boolean settings that are not overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingToggle {
    #[serde(rename = "autoStart")]
    AutoStart,
    #[serde(rename = "notifications")]
    Notifications,
}

impl SettingToggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingToggle::AutoStart => "autoStart",
            SettingToggle::Notifications => "notifications",
        }
    }
}

impl std::fmt::Display for SettingToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SettingToggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "autostart" | "auto_start" | "auto-start" => Ok(SettingToggle::AutoStart),
            "notifications" | "notify" => Ok(SettingToggle::Notifications),
            _ => Err(format!("Unknown setting: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_slot_parsing() {
        assert_eq!("d".parse::<SpellSlot>(), Ok(SpellSlot::First));
        assert_eq!("F".parse::<SpellSlot>(), Ok(SpellSlot::Second));
        assert_eq!("spell2".parse::<SpellSlot>(), Ok(SpellSlot::Second));
        assert!("q".parse::<SpellSlot>().is_err());
    }

    #[test]
    fn test_setting_toggle_parsing() {
        assert_eq!("autoStart".parse::<SettingToggle>(), Ok(SettingToggle::AutoStart));
        assert_eq!("notifications".parse::<SettingToggle>(), Ok(SettingToggle::Notifications));
        assert!("minimap".parse::<SettingToggle>().is_err());
    }

    #[test]
    fn test_match_result_wire_name() {
        let json = serde_json::to_string(&MatchResult::Victory).unwrap();
        assert_eq!(json, "\"Victory\"");
    }
}
