mod cooldown;
mod overlay;

pub use cooldown::{CooldownKey, CooldownTable};
pub use overlay::SpellTracker;
