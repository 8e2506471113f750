//! # Active Effects
//!
//! Effects triggered when an artifact is activated; each use spends a charge.

use super::EffectFamily;
use serde::{Deserialize, Serialize};

/// Active effect identifier (AEA).
///
/// Discriminants are persisted as integers; do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ActiveEffect {
    Null = 0,

    Storm,
    Fireball,
    Adrenaline,
    Map,
    Blood,
    Fatigue,
    Acidball,
    Pulse,
    Heal,
    Confused,
    Entrance,
    Bugs,
    Teleport,
    Light,
    Growth,
    Hurtall,

    Split,

    Radiation,
    Pain,
    Mutate,
    Paralyze,
    Firestorm,
    Attention,
    Teleglow,
    Noise,
    Scream,
    Dim,
    Flash,
    Vomit,
    Shadows,
}

/// Number of active identifiers, sentinels included.
pub const NUM_ACTIVE_EFFECTS: usize = 31;

pub(crate) const ACTIVE_EFFECTS: [(ActiveEffect, &str, i32); NUM_ACTIVE_EFFECTS] = [
    (ActiveEffect::Null, "AEA_NULL", 0),
    (ActiveEffect::Storm, "AEA_STORM", 2),
    (ActiveEffect::Fireball, "AEA_FIREBALL", 4),
    (ActiveEffect::Adrenaline, "AEA_ADRENALINE", 5),
    (ActiveEffect::Map, "AEA_MAP", 4),
    (ActiveEffect::Blood, "AEA_BLOOD", 0),
    (ActiveEffect::Fatigue, "AEA_FATIGUE", 0),
    (ActiveEffect::Acidball, "AEA_ACIDBALL", 4),
    (ActiveEffect::Pulse, "AEA_PULSE", 5),
    (ActiveEffect::Heal, "AEA_HEAL", 4),
    (ActiveEffect::Confused, "AEA_CONFUSED", 3),
    (ActiveEffect::Entrance, "AEA_ENTRANCE", 3),
    (ActiveEffect::Bugs, "AEA_BUGS", 3),
    (ActiveEffect::Teleport, "AEA_TELEPORT", 5),
    (ActiveEffect::Light, "AEA_LIGHT", 1),
    (ActiveEffect::Growth, "AEA_GROWTH", 4),
    (ActiveEffect::Hurtall, "AEA_HURTALL", 6),
    (ActiveEffect::Split, "AEA_SPLIT", 0),
    (ActiveEffect::Radiation, "AEA_RADIATION", -3),
    (ActiveEffect::Pain, "AEA_PAIN", -2),
    (ActiveEffect::Mutate, "AEA_MUTATE", -3),
    (ActiveEffect::Paralyze, "AEA_PARALYZE", -2),
    (ActiveEffect::Firestorm, "AEA_FIRESTORM", -3),
    (ActiveEffect::Attention, "AEA_ATTENTION", -6),
    (ActiveEffect::Teleglow, "AEA_TELEGLOW", -4),
    (ActiveEffect::Noise, "AEA_NOISE", -2),
    (ActiveEffect::Scream, "AEA_SCREAM", -2),
    (ActiveEffect::Dim, "AEA_DIM", -3),
    (ActiveEffect::Flash, "AEA_FLASH", -4),
    (ActiveEffect::Vomit, "AEA_VOMIT", -2),
    (ActiveEffect::Shadows, "AEA_SHADOWS", -5),
];

impl EffectFamily for ActiveEffect {
    const NULL: Self = ActiveEffect::Null;
    const SPLIT: Self = ActiveEffect::Split;
    const COUNT: usize = NUM_ACTIVE_EFFECTS;
    const FAMILY: &'static str = "active";

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        ACTIVE_EFFECTS.get(index).map(|entry| entry.0)
    }

    fn cost(self) -> i32 {
        ACTIVE_EFFECTS[self.index()].2
    }

    fn name(self) -> &'static str {
        ACTIVE_EFFECTS[self.index()].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for (index, (effect, _, _)) in ACTIVE_EFFECTS.iter().enumerate() {
            assert_eq!(effect.index(), index, "{:?} is out of place", effect);
        }
        assert_eq!(ActiveEffect::Shadows.index(), NUM_ACTIVE_EFFECTS - 1);
    }

    #[test]
    fn test_known_costs() {
        assert_eq!(ActiveEffect::Null.cost(), 0);
        assert_eq!(ActiveEffect::Hurtall.cost(), 6);
        assert_eq!(ActiveEffect::Attention.cost(), -6);
        assert_eq!(ActiveEffect::Blood.cost(), 0);
    }

    #[test]
    fn test_split_sits_between_ranges() {
        assert_eq!(ActiveEffect::Split.index(), 17);
        assert!(ActiveEffect::Hurtall.is_good());
        assert!(ActiveEffect::Radiation.is_bad());
        assert!(!ActiveEffect::Split.is_good() && !ActiveEffect::Split.is_bad());
    }
}
