//! # Passive Effects
//!
//! Effects an artifact exerts while wielded, worn or carried.

use super::EffectFamily;
use serde::{Deserialize, Serialize};

/// Passive effect identifier (AEP).
///
/// Discriminants are dense and persisted as integers, so the declaration
/// order here is part of the save format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PassiveEffect {
    Null = 0,

    StrUp,
    DexUp,
    PerUp,
    IntUp,
    AllUp,
    SpeedUp,
    Pblue,
    Snakes,
    Invisible,
    Clairvoyance,
    ClairvoyancePlus,
    SuperClairvoyance,
    Stealth,
    Extinguish,
    Glow,
    Psyshield,
    ResistElectricity,
    CarryMore,
    SapLife,

    Split,

    Hunger,
    Thirst,
    Smoke,
    Evil,
    Schizo,
    Radioactive,
    Mutagenic,
    Attention,
    StrDown,
    DexDown,
    PerDown,
    IntDown,
    AllDown,
    SpeedDown,
    ForceTeleport,
    MovementNoise,
    BadWeather,
    Sick,
}

/// Number of passive identifiers, sentinels included.
pub const NUM_PASSIVE_EFFECTS: usize = 39;

/// Dense table indexed by discriminant: (id, persisted name, power cost).
pub(crate) const PASSIVE_EFFECTS: [(PassiveEffect, &str, i32); NUM_PASSIVE_EFFECTS] = [
    (PassiveEffect::Null, "AEP_NULL", 0),
    (PassiveEffect::StrUp, "AEP_STR_UP", 3),
    (PassiveEffect::DexUp, "AEP_DEX_UP", 3),
    (PassiveEffect::PerUp, "AEP_PER_UP", 3),
    (PassiveEffect::IntUp, "AEP_INT_UP", 3),
    (PassiveEffect::AllUp, "AEP_ALL_UP", 5),
    (PassiveEffect::SpeedUp, "AEP_SPEED_UP", 4),
    (PassiveEffect::Pblue, "AEP_PBLUE", 2),
    (PassiveEffect::Snakes, "AEP_SNAKES", 4),
    (PassiveEffect::Invisible, "AEP_INVISIBLE", 7),
    (PassiveEffect::Clairvoyance, "AEP_CLAIRVOYANCE", 5),
    (PassiveEffect::ClairvoyancePlus, "AEP_CLAIRVOYANCE_PLUS", 7),
    (PassiveEffect::SuperClairvoyance, "AEP_SUPER_CLAIRVOYANCE", 50),
    (PassiveEffect::Stealth, "AEP_STEALTH", 2),
    (PassiveEffect::Extinguish, "AEP_EXTINGUISH", 2),
    (PassiveEffect::Glow, "AEP_GLOW", 1),
    (PassiveEffect::Psyshield, "AEP_PSYSHIELD", 1),
    (PassiveEffect::ResistElectricity, "AEP_RESIST_ELECTRICITY", 3),
    (PassiveEffect::CarryMore, "AEP_CARRY_MORE", 3),
    (PassiveEffect::SapLife, "AEP_SAP_LIFE", 5),
    (PassiveEffect::Split, "AEP_SPLIT", 0),
    (PassiveEffect::Hunger, "AEP_HUNGER", -2),
    (PassiveEffect::Thirst, "AEP_THIRST", -2),
    (PassiveEffect::Smoke, "AEP_SMOKE", -1),
    (PassiveEffect::Evil, "AEP_EVIL", -5),
    (PassiveEffect::Schizo, "AEP_SCHIZO", -3),
    (PassiveEffect::Radioactive, "AEP_RADIOACTIVE", -5),
    (PassiveEffect::Mutagenic, "AEP_MUTAGENIC", -3),
    (PassiveEffect::Attention, "AEP_ATTENTION", -5),
    (PassiveEffect::StrDown, "AEP_STR_DOWN", -2),
    (PassiveEffect::DexDown, "AEP_DEX_DOWN", -2),
    (PassiveEffect::PerDown, "AEP_PER_DOWN", -2),
    (PassiveEffect::IntDown, "AEP_INT_DOWN", -2),
    (PassiveEffect::AllDown, "AEP_ALL_DOWN", -5),
    (PassiveEffect::SpeedDown, "AEP_SPEED_DOWN", -4),
    (PassiveEffect::ForceTeleport, "AEP_FORCE_TELEPORT", -5),
    (PassiveEffect::MovementNoise, "AEP_MOVEMENT_NOISE", -3),
    (PassiveEffect::BadWeather, "AEP_BAD_WEATHER", -2),
    (PassiveEffect::Sick, "AEP_SICK", -1),
];

impl EffectFamily for PassiveEffect {
    const NULL: Self = PassiveEffect::Null;
    const SPLIT: Self = PassiveEffect::Split;
    const COUNT: usize = NUM_PASSIVE_EFFECTS;
    const FAMILY: &'static str = "passive";

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        PASSIVE_EFFECTS.get(index).map(|entry| entry.0)
    }

    fn cost(self) -> i32 {
        PASSIVE_EFFECTS[self.index()].2
    }

    fn name(self) -> &'static str {
        PASSIVE_EFFECTS[self.index()].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for (index, (effect, _, _)) in PASSIVE_EFFECTS.iter().enumerate() {
            assert_eq!(effect.index(), index, "{:?} is out of place", effect);
        }
        assert_eq!(PassiveEffect::Sick.index(), NUM_PASSIVE_EFFECTS - 1);
    }

    #[test]
    fn test_persisted_layout() {
        assert_eq!(NUM_PASSIVE_EFFECTS, 39);
        assert_eq!(PassiveEffect::SapLife.index(), 19);
        assert_eq!(PassiveEffect::Split.index(), 20);
        assert_eq!(PassiveEffect::Hunger.index(), 21);
        assert_eq!(PassiveEffect::Sick.index(), 38);
        assert_eq!(PassiveEffect::from_index(39), None);
    }

    #[test]
    fn test_known_costs() {
        assert_eq!(PassiveEffect::Null.cost(), 0);
        assert_eq!(PassiveEffect::Split.cost(), 0);
        assert_eq!(PassiveEffect::SuperClairvoyance.cost(), 50);
        assert_eq!(PassiveEffect::Evil.cost(), -5);
        assert_eq!(PassiveEffect::Sick.cost(), -1);
    }

    #[test]
    fn test_cost_signs_follow_ranges() {
        for effect in (1..NUM_PASSIVE_EFFECTS).filter_map(PassiveEffect::from_index) {
            if effect.is_good() {
                assert!(effect.cost() >= 0, "{:?} is good but costs {}", effect, effect.cost());
            }
            if effect.is_bad() {
                assert!(effect.cost() <= 0, "{:?} is bad but costs {}", effect, effect.cost());
            }
        }
    }
}
