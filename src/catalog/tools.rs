//! # Tool Forms and Weapon Archetypes
//!
//! A tool artifact starts from a form (harp, staff, ...) whose base weapon
//! archetype supplies its melee stats. Some forms can also be fused with a
//! second, "extra" weapon.

use crate::{Color, Mass, Volume};
use serde::{Deserialize, Serialize};

/// Melee archetype of a tool artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    /// A bulky item that works okay for bashing
    Bulk,
    /// An item designed to bash
    Club,
    /// A stab-only weapon
    Spear,
    /// A long slasher
    Sword,
    /// Short and pointed
    Knife,
}

/// Stat ranges of a weapon archetype.
///
/// `volume` and `weight` only apply when the archetype is fused on as an
/// extra weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponDatum {
    pub adjective: &'static str,
    pub volume: Volume,
    pub weight: Mass,
    pub bash: (i32, i32),
    pub cut: (i32, i32),
    pub stab: (i32, i32),
    pub to_hit: (i32, i32),
    /// Item flag granted by the archetype
    pub tag: Option<&'static str>,
}

pub(crate) const WEAPON_DATA: [WeaponDatum; 5] = [
    WeaponDatum {
        adjective: "Heavy",
        volume: Volume::from_ml(0),
        weight: Mass::from_grams(1400),
        bash: (10, 20),
        cut: (0, 0),
        stab: (0, 0),
        to_hit: (-2, 0),
        tag: None,
    },
    WeaponDatum {
        adjective: "Knobbed",
        volume: Volume::from_ml(250),
        weight: Mass::from_grams(250),
        bash: (14, 30),
        cut: (0, 0),
        stab: (0, 0),
        to_hit: (-1, 1),
        tag: None,
    },
    WeaponDatum {
        adjective: "Spiked",
        volume: Volume::from_ml(250),
        weight: Mass::from_grams(100),
        bash: (0, 0),
        cut: (0, 0),
        stab: (20, 40),
        to_hit: (-1, 1),
        tag: None,
    },
    WeaponDatum {
        adjective: "Edged",
        volume: Volume::from_ml(500),
        weight: Mass::from_grams(450),
        bash: (0, 0),
        cut: (20, 50),
        stab: (0, 0),
        to_hit: (-1, 2),
        tag: Some("SHEATH_SWORD"),
    },
    WeaponDatum {
        adjective: "Bladed",
        volume: Volume::from_ml(250),
        weight: Mass::from_grams(2250),
        bash: (0, 0),
        cut: (0, 0),
        stab: (12, 30),
        to_hit: (-1, 1),
        tag: Some("SHEATH_KNIFE"),
    },
];

impl WeaponKind {
    pub const ALL: [WeaponKind; 5] = [
        WeaponKind::Bulk,
        WeaponKind::Club,
        WeaponKind::Spear,
        WeaponKind::Sword,
        WeaponKind::Knife,
    ];

    pub fn data(self) -> &'static WeaponDatum {
        &WEAPON_DATA[self as usize]
    }
}

/// Overall form of a tool artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolForm {
    Harp,
    Staff,
    Sword,
    Dagger,
    Cube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolFormDatum {
    pub name: &'static str,
    pub sym: char,
    pub color: Color,
    pub material: &'static str,
    pub volume_min: Volume,
    pub volume_max: Volume,
    pub weight_min: Mass,
    pub weight_max: Mass,
    pub base_weapon: WeaponKind,
    /// Candidate extra weapons; an empty slot means "no extra"
    pub extra_weapons: [Option<WeaponKind>; 3],
}

pub(crate) const TOOL_FORM_DATA: [ToolFormDatum; 5] = [
    ToolFormDatum {
        name: "Harp",
        sym: ';',
        color: Color::Yellow,
        material: "wood",
        volume_min: Volume::from_ml(5000),
        volume_max: Volume::from_ml(7500),
        weight_min: Mass::from_grams(1150),
        weight_max: Mass::from_grams(2100),
        base_weapon: WeaponKind::Bulk,
        extra_weapons: [Some(WeaponKind::Spear), Some(WeaponKind::Sword), Some(WeaponKind::Knife)],
    },
    ToolFormDatum {
        name: "Staff",
        sym: '/',
        color: Color::Brown,
        material: "wood",
        volume_min: Volume::from_ml(1500),
        volume_max: Volume::from_ml(3000),
        weight_min: Mass::from_grams(450),
        weight_max: Mass::from_grams(1150),
        base_weapon: WeaponKind::Club,
        extra_weapons: [Some(WeaponKind::Bulk), Some(WeaponKind::Spear), Some(WeaponKind::Knife)],
    },
    ToolFormDatum {
        name: "Sword",
        sym: '/',
        color: Color::LightBlue,
        material: "steel",
        volume_min: Volume::from_ml(2000),
        volume_max: Volume::from_ml(3500),
        weight_min: Mass::from_grams(900),
        weight_max: Mass::from_grams(3259),
        base_weapon: WeaponKind::Sword,
        extra_weapons: [Some(WeaponKind::Bulk), None, None],
    },
    ToolFormDatum {
        name: "Dagger",
        sym: ';',
        color: Color::LightBlue,
        material: "steel",
        volume_min: Volume::from_ml(250),
        volume_max: Volume::from_ml(1000),
        weight_min: Mass::from_grams(100),
        weight_max: Mass::from_grams(700),
        base_weapon: WeaponKind::Knife,
        extra_weapons: [None, None, None],
    },
    ToolFormDatum {
        name: "Cube",
        sym: '*',
        color: Color::White,
        material: "steel",
        volume_min: Volume::from_ml(250),
        volume_max: Volume::from_ml(750),
        weight_min: Mass::from_grams(100),
        weight_max: Mass::from_grams(2300),
        base_weapon: WeaponKind::Bulk,
        extra_weapons: [Some(WeaponKind::Spear), None, None],
    },
];

impl ToolForm {
    pub const ALL: [ToolForm; 5] = [
        ToolForm::Harp,
        ToolForm::Staff,
        ToolForm::Sword,
        ToolForm::Dagger,
        ToolForm::Cube,
    ];

    pub fn data(self) -> &'static ToolFormDatum {
        &TOOL_FORM_DATA[self as usize]
    }
}
