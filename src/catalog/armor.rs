//! # Armor Forms and Mods
//!
//! Armor artifacts copy a fixed stat block from their form and may receive
//! one mod that shifts those stats.

use crate::{BodyPart, BodyParts, Color, Mass, Volume};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorForm {
    Robe,
    Coat,
    Mask,
    Helm,
    Gloves,
    Boots,
    Ring,
}

/// Fixed stat block of an armor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmorFormDatum {
    pub name: &'static str,
    pub color: Color,
    pub material: &'static str,
    pub volume: Volume,
    pub weight: Mass,
    pub encumber: i32,
    pub coverage: i32,
    pub thickness: i32,
    pub env_resist: i32,
    pub warmth: i32,
    pub storage: Volume,
    pub melee_bash: i32,
    pub melee_cut: i32,
    pub to_hit: i32,
    pub covers: BodyParts,
    pub plural: bool,
    /// Mods this form can roll; an empty slot means "no mod"
    pub available_mods: [Option<ArmorModKind>; 5],
}

use ArmorModKind::{Bulky, Furred, Light, Padded, Plated, Pocketed};

pub(crate) const ARMOR_FORM_DATA: [ArmorFormDatum; 7] = [
    ArmorFormDatum {
        name: "Robe",
        color: Color::Red,
        material: "wool",
        volume: Volume::from_ml(1500),
        weight: Mass::from_grams(700),
        encumber: 1,
        coverage: 90,
        thickness: 3,
        env_resist: 0,
        warmth: 2,
        storage: Volume::from_ml(0),
        melee_bash: -8,
        melee_cut: 0,
        to_hit: -3,
        covers: BodyParts::of(&[BodyPart::Torso, BodyPart::LegL, BodyPart::LegR]),
        plural: false,
        available_mods: [Some(Light), Some(Bulky), Some(Pocketed), Some(Furred), Some(Padded)],
    },
    ArmorFormDatum {
        name: "Coat",
        color: Color::Brown,
        material: "leather",
        volume: Volume::from_ml(3500),
        weight: Mass::from_grams(1600),
        encumber: 2,
        coverage: 80,
        thickness: 2,
        env_resist: 1,
        warmth: 4,
        storage: Volume::from_ml(1000),
        melee_bash: -6,
        melee_cut: 0,
        to_hit: -3,
        covers: BodyParts::of(&[BodyPart::Torso]),
        plural: false,
        available_mods: [Some(Light), Some(Pocketed), Some(Furred), Some(Padded), Some(Plated)],
    },
    ArmorFormDatum {
        name: "Mask",
        color: Color::White,
        material: "wood",
        volume: Volume::from_ml(1000),
        weight: Mass::from_grams(100),
        encumber: 2,
        coverage: 50,
        thickness: 2,
        env_resist: 1,
        warmth: 2,
        storage: Volume::from_ml(0),
        melee_bash: 2,
        melee_cut: 0,
        to_hit: -2,
        covers: BodyParts::of(&[BodyPart::Eyes, BodyPart::Mouth]),
        plural: false,
        available_mods: [Some(Furred), Some(Furred), None, None, None],
    },
    ArmorFormDatum {
        name: "Helm",
        color: Color::DarkGray,
        material: "silver",
        volume: Volume::from_ml(1500),
        weight: Mass::from_grams(700),
        encumber: 2,
        coverage: 85,
        thickness: 3,
        env_resist: 0,
        warmth: 1,
        storage: Volume::from_ml(0),
        melee_bash: 8,
        melee_cut: 0,
        to_hit: -2,
        covers: BodyParts::of(&[BodyPart::Head]),
        plural: false,
        available_mods: [Some(Bulky), Some(Furred), Some(Padded), Some(Plated), None],
    },
    ArmorFormDatum {
        name: "Gloves",
        color: Color::LightBlue,
        material: "leather",
        volume: Volume::from_ml(500),
        weight: Mass::from_grams(100),
        encumber: 1,
        coverage: 90,
        thickness: 3,
        env_resist: 1,
        warmth: 2,
        storage: Volume::from_ml(0),
        melee_bash: -4,
        melee_cut: 0,
        to_hit: -2,
        covers: BodyParts::of(&[BodyPart::HandL, BodyPart::HandR]),
        plural: true,
        available_mods: [Some(Bulky), Some(Furred), Some(Padded), Some(Plated), None],
    },
    ArmorFormDatum {
        name: "Boots",
        color: Color::Blue,
        material: "leather",
        volume: Volume::from_ml(1500),
        weight: Mass::from_grams(250),
        encumber: 1,
        coverage: 75,
        thickness: 3,
        env_resist: 1,
        warmth: 3,
        storage: Volume::from_ml(0),
        melee_bash: 4,
        melee_cut: 0,
        to_hit: -1,
        covers: BodyParts::of(&[BodyPart::FootL, BodyPart::FootR]),
        plural: true,
        available_mods: [Some(Light), Some(Bulky), Some(Padded), Some(Plated), None],
    },
    ArmorFormDatum {
        name: "Ring",
        color: Color::LightGreen,
        material: "silver",
        volume: Volume::from_ml(0),
        weight: Mass::from_grams(4),
        encumber: 0,
        coverage: 0,
        thickness: 0,
        env_resist: 0,
        warmth: 0,
        storage: Volume::from_ml(0),
        melee_bash: 0,
        melee_cut: 0,
        to_hit: 0,
        covers: BodyParts::NONE,
        plural: true,
        available_mods: [None, None, None, None, None],
    },
];

impl ArmorForm {
    pub const ALL: [ArmorForm; 7] = [
        ArmorForm::Robe,
        ArmorForm::Coat,
        ArmorForm::Mask,
        ArmorForm::Helm,
        ArmorForm::Gloves,
        ArmorForm::Boots,
        ArmorForm::Ring,
    ];

    pub fn data(self) -> &'static ArmorFormDatum {
        &ARMOR_FORM_DATA[self as usize]
    }
}

/// Modification applied on top of an armor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorModKind {
    Light,
    Bulky,
    Pocketed,
    Furred,
    Padded,
    Plated,
}

/// Signed stat deltas of an armor mod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmorModDatum {
    /// Completes "It is ..." / "They are ..."
    pub desc: &'static str,
    /// Material added as a secondary material
    pub material: Option<&'static str>,
    pub volume: Volume,
    pub weight: Mass,
    pub encumber: i32,
    pub coverage: i32,
    pub thickness: i32,
    pub env_resist: i32,
    pub warmth: i32,
    pub storage: Volume,
}

const fn armor_mod(
    desc: &'static str,
    material: Option<&'static str>,
    volume: i32,
    weight: i32,
    stats: [i32; 5],
    storage: i32,
) -> ArmorModDatum {
    ArmorModDatum {
        desc,
        material,
        volume: Volume::from_ml(volume),
        weight: Mass::from_grams(weight),
        encumber: stats[0],
        coverage: stats[1],
        thickness: stats[2],
        env_resist: stats[3],
        warmth: stats[4],
        storage: Volume::from_ml(storage),
    }
}

// Stats: encumber, coverage, thickness, env_resist, warmth
pub(crate) const ARMOR_MOD_DATA: [ArmorModDatum; 6] = [
    armor_mod("very thin and light.", None, -1000, -950, [-2, -1, -1, -1, -1], 0),
    armor_mod("extremely bulky.", None, 2000, 1150, [2, 1, 1, 0, 1], 0),
    armor_mod("covered in pockets.", None, 250, 150, [1, 0, 0, 0, 0], 4000),
    armor_mod("disgustingly furry.", Some("wool"), 1000, 250, [1, 1, 1, 1, 3], 0),
    armor_mod("leather-padded.", Some("leather"), 1000, 450, [1, 1, 1, 0, 1], -750),
    armor_mod("plated in iron.", Some("iron"), 1000, 1400, [3, 2, 2, 0, 1], -1000),
];

impl ArmorModKind {
    pub const ALL: [ArmorModKind; 6] = [Light, Bulky, Pocketed, Furred, Padded, Plated];

    pub fn data(self) -> &'static ArmorModDatum {
        &ARMOR_MOD_DATA[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_is_tiny_and_unmoddable() {
        let ring = ArmorForm::Ring.data();
        assert_eq!(ring.volume, Volume::from_ml(0));
        assert_eq!(ring.weight, Mass::from_grams(4));
        assert!(ring.available_mods.iter().all(Option::is_none));
    }

    #[test]
    fn test_mod_table_order() {
        assert_eq!(ArmorModKind::Plated.data().desc, "plated in iron.");
        assert_eq!(ArmorModKind::Light.data().volume, Volume::from_ml(-1000));
        assert_eq!(ArmorModKind::Pocketed.data().storage, Volume::from_ml(4000));
    }

    #[test]
    fn test_covers_masks() {
        let robe = ArmorForm::Robe.data().covers;
        assert!(robe.contains(BodyPart::Torso));
        assert!(robe.contains(BodyPart::LegR));
        assert!(!robe.contains(BodyPart::Head));
        assert!(ArmorForm::Ring.data().covers.is_empty());
    }
}
