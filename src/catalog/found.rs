//! # Natural Artifact Tables
//!
//! Shapes and properties combined into found-object artifacts such as a
//! "glowing sphere" or a "fractal knot".

use crate::{ActiveEffect as A, Mass, PassiveEffect as P, Volume};
use serde::{Deserialize, Serialize};

/// Physical shape of a natural artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaturalShape {
    Sphere,
    Rod,
    Teardrop,
    Lamp,
    Snake,
    Disc,
    Beads,
    Napkin,
    Urchin,
    Jelly,
    Spiral,
    Pin,
    Tube,
    Pyramid,
    Crystal,
    Knot,
    Crescent,
}

/// Size and description of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDatum {
    pub name: &'static str,
    pub desc: &'static str,
    pub volume_min: Volume,
    pub volume_max: Volume,
    pub weight_min: Mass,
    pub weight_max: Mass,
}

const fn shape(name: &'static str, desc: &'static str, volume: (i32, i32), weight: (i32, i32)) -> ShapeDatum {
    ShapeDatum {
        name,
        desc,
        volume_min: Volume::from_ml(volume.0),
        volume_max: Volume::from_ml(volume.1),
        weight_min: Mass::from_grams(weight.0),
        weight_max: Mass::from_grams(weight.1),
    }
}

pub(crate) const SHAPE_DATA: [ShapeDatum; 17] = [
    shape("sphere", "smooth sphere", (500, 1000), (1, 1150)),
    shape("rod", "tapered rod", (250, 1750), (1, 800)),
    shape("teardrop", "teardrop-shaped stone", (500, 1500), (1, 950)),
    shape("lamp", "hollow, transparent cube", (225, 1000), (1, 350)),
    shape("snake", "winding, flexible rod", (0, 2000), (1, 950)),
    shape("disc", "smooth disc", (1000, 1500), (200, 400)),
    shape("beads", "string of beads", (750, 1750), (1, 700)),
    shape("napkin", "very thin sheet", (0, 750), (1, 350)),
    shape("urchin", "spiked sphere", (750, 1250), (200, 700)),
    shape("jelly", "malleable blob", (500, 2000), (200, 450)),
    shape("spiral", "spiraling rod", (1250, 1500), (200, 350)),
    shape("pin", "pointed rod", (250, 1250), (100, 1050)),
    shape("tube", "hollow tube", (500, 1250), (350, 700)),
    shape("pyramid", "regular tetrahedron", (750, 1750), (200, 450)),
    shape("crystal", "translucent crystal", (250, 1500), (200, 800)),
    shape("knot", "twisted, knotted cord", (500, 1500), (100, 800)),
    shape("crescent", "crescent-shaped stone", (500, 1500), (200, 700)),
];

impl NaturalShape {
    pub const ALL: [NaturalShape; 17] = [
        NaturalShape::Sphere,
        NaturalShape::Rod,
        NaturalShape::Teardrop,
        NaturalShape::Lamp,
        NaturalShape::Snake,
        NaturalShape::Disc,
        NaturalShape::Beads,
        NaturalShape::Napkin,
        NaturalShape::Urchin,
        NaturalShape::Jelly,
        NaturalShape::Spiral,
        NaturalShape::Pin,
        NaturalShape::Tube,
        NaturalShape::Pyramid,
        NaturalShape::Crystal,
        NaturalShape::Knot,
        NaturalShape::Crescent,
    ];

    pub fn data(self) -> &'static ShapeDatum {
        &SHAPE_DATA[self as usize]
    }
}

/// Surface property of a natural artifact, which also suggests its effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaturalProperty {
    Wriggling,
    Glowing,
    Humming,
    Moving,
    Whispering,
    Breathing,
    Dead,
    Itchy,
    Glittering,
    Electric,
    Slimy,
    Engraved,
    Crackling,
    Warm,
    Rattling,
    Scaled,
    Fractal,
}

/// Name, description and effect hints of a property.
///
/// Null slots in the hint arrays mean "no hint"; the sampler then falls back
/// to the whole good or bad range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDatum {
    pub name: &'static str,
    pub desc: &'static str,
    pub passive_good: [P; 4],
    pub passive_bad: [P; 4],
    pub active_good: [A; 4],
    pub active_bad: [A; 4],
}

pub(crate) const PROPERTY_DATA: [PropertyDatum; 17] = [
    PropertyDatum {
        name: "wriggling",
        desc: "is constantly wriggling",
        passive_good: [P::SpeedUp, P::Snakes, P::Null, P::Null],
        passive_bad: [P::DexDown, P::ForceTeleport, P::Sick, P::Null],
        active_good: [A::Teleport, A::Adrenaline, A::Null, A::Null],
        active_bad: [A::Mutate, A::Attention, A::Vomit, A::Null],
    },
    PropertyDatum {
        name: "glowing",
        desc: "glows faintly",
        passive_good: [P::IntUp, P::Glow, P::Clairvoyance, P::Null],
        passive_bad: [P::Radioactive, P::Mutagenic, P::Attention, P::Null],
        active_good: [A::Light, A::Light, A::Light, A::Null],
        active_bad: [A::Attention, A::Teleglow, A::Flash, A::Shadows],
    },
    PropertyDatum {
        name: "humming",
        desc: "hums very quietly",
        passive_good: [P::AllUp, P::Psyshield, P::Null, P::Null],
        passive_bad: [P::Schizo, P::PerDown, P::IntDown, P::Null],
        active_good: [A::Pulse, A::Entrance, A::Null, A::Null],
        active_bad: [A::Noise, A::Noise, A::Scream, A::Null],
    },
    PropertyDatum {
        name: "moving",
        desc: "shifts from side to side slowly",
        passive_good: [P::StrUp, P::DexUp, P::SpeedUp, P::Null],
        passive_bad: [P::Hunger, P::PerDown, P::ForceTeleport, P::Null],
        active_good: [A::Teleport, A::Teleport, A::Map, A::Null],
        active_bad: [A::Paralyze, A::Vomit, A::Vomit, A::Null],
    },
    PropertyDatum {
        name: "whispering",
        desc: "makes very faint whispering sounds",
        passive_good: [P::Clairvoyance, P::Extinguish, P::Stealth, P::Null],
        passive_bad: [P::Evil, P::Schizo, P::Attention, P::Null],
        active_good: [A::Fatigue, A::Entrance, A::Entrance, A::Null],
        active_bad: [A::Attention, A::Scream, A::Scream, A::Shadows],
    },
    PropertyDatum {
        name: "breathing",
        desc: "shrinks and grows very slightly with a regular pulse, as if breathing",
        passive_good: [P::SapLife, P::AllUp, P::SpeedUp, P::CarryMore],
        passive_bad: [P::Hunger, P::Thirst, P::Sick, P::BadWeather],
        active_good: [A::Adrenaline, A::Heal, A::Entrance, A::Growth],
        active_bad: [A::Mutate, A::Attention, A::Shadows, A::Null],
    },
    PropertyDatum {
        name: "dead",
        desc: "is icy cold to the touch",
        passive_good: [P::Invisible, P::Clairvoyance, P::Extinguish, P::SapLife],
        passive_bad: [P::Hunger, P::Evil, P::AllDown, P::Sick],
        active_good: [A::Blood, A::Hurtall, A::Null, A::Null],
        active_bad: [A::Pain, A::Shadows, A::Dim, A::Vomit],
    },
    PropertyDatum {
        name: "itchy",
        desc: "makes your skin itch slightly when it is close",
        passive_good: [P::DexUp, P::SpeedUp, P::Psyshield, P::Null],
        passive_bad: [P::Radioactive, P::Mutagenic, P::Sick, P::Null],
        active_good: [A::Adrenaline, A::Blood, A::Heal, A::Bugs],
        active_bad: [A::Radiation, A::Pain, A::Pain, A::Vomit],
    },
    PropertyDatum {
        name: "glittering",
        desc: "glitters faintly under direct light",
        passive_good: [P::IntUp, P::Extinguish, P::Glow, P::Null],
        passive_bad: [P::Smoke, P::Attention, P::Null, P::Null],
        active_good: [A::Map, A::Light, A::Confused, A::Entrance],
        active_bad: [A::Radiation, A::Mutate, A::Attention, A::Flash],
    },
    PropertyDatum {
        name: "electric",
        desc: "very weakly shocks you when touched",
        passive_good: [P::ResistElectricity, P::DexUp, P::SpeedUp, P::Psyshield],
        passive_bad: [P::Thirst, P::Smoke, P::StrDown, P::BadWeather],
        active_good: [A::Storm, A::Adrenaline, A::Light, A::Null],
        active_bad: [A::Pain, A::Paralyze, A::Flash, A::Flash],
    },
    PropertyDatum {
        name: "slimy",
        desc: "feels slimy",
        passive_good: [P::Snakes, P::Stealth, P::Extinguish, P::SapLife],
        passive_bad: [P::Thirst, P::DexDown, P::SpeedDown, P::Sick],
        active_good: [A::Blood, A::Acidball, A::Growth, A::Acidball],
        active_bad: [A::Mutate, A::Mutate, A::Vomit, A::Vomit],
    },
    PropertyDatum {
        name: "engraved",
        desc: "is covered with odd etchings",
        passive_good: [P::Clairvoyance, P::Invisible, P::Psyshield, P::SapLife],
        passive_bad: [P::Evil, P::Attention, P::Null, P::Null],
        active_good: [A::Fatigue, A::Teleport, A::Heal, A::Fatigue],
        active_bad: [A::Attention, A::Attention, A::Teleglow, A::Dim],
    },
    PropertyDatum {
        name: "crackling",
        desc: "occasionally makes a soft crackling sound",
        passive_good: [P::Extinguish, P::ResistElectricity, P::Null, P::Null],
        passive_bad: [P::Smoke, P::Radioactive, P::MovementNoise, P::Null],
        active_good: [A::Storm, A::Fireball, A::Pulse, A::Null],
        active_bad: [A::Pain, A::Paralyze, A::Noise, A::Noise],
    },
    PropertyDatum {
        name: "warm",
        desc: "is warm to the touch",
        passive_good: [P::StrUp, P::Extinguish, P::Glow, P::Null],
        passive_bad: [P::Smoke, P::Radioactive, P::Null, P::Null],
        active_good: [A::Fireball, A::Fireball, A::Fireball, A::Light],
        active_bad: [A::Firestorm, A::Firestorm, A::Teleglow, A::Null],
    },
    PropertyDatum {
        name: "rattling",
        desc: "makes a rattling sound when moved",
        passive_good: [P::DexUp, P::SpeedUp, P::Snakes, P::CarryMore],
        passive_bad: [P::Attention, P::IntDown, P::MovementNoise, P::MovementNoise],
        active_good: [A::Blood, A::Pulse, A::Bugs, A::Null],
        active_bad: [A::Pain, A::Attention, A::Noise, A::Null],
    },
    PropertyDatum {
        name: "scaled",
        desc: "has a surface reminiscent of reptile scales",
        passive_good: [P::Snakes, P::Snakes, P::Snakes, P::Stealth],
        passive_bad: [P::Thirst, P::Mutagenic, P::SpeedDown, P::Null],
        active_good: [A::Adrenaline, A::Bugs, A::Growth, A::Null],
        active_bad: [A::Mutate, A::Scream, A::Dim, A::Null],
    },
    PropertyDatum {
        name: "fractal",
        desc: "has a self-similar pattern which repeats until it is too small for you to see",
        passive_good: [P::AllUp, P::AllUp, P::Clairvoyance, P::Psyshield],
        passive_bad: [P::Schizo, P::Attention, P::ForceTeleport, P::BadWeather],
        active_good: [A::Storm, A::Fatigue, A::Teleport, A::Null],
        active_bad: [A::Radiation, A::Mutate, A::Teleglow, A::Teleglow],
    },
];

impl NaturalProperty {
    pub const ALL: [NaturalProperty; 17] = [
        NaturalProperty::Wriggling,
        NaturalProperty::Glowing,
        NaturalProperty::Humming,
        NaturalProperty::Moving,
        NaturalProperty::Whispering,
        NaturalProperty::Breathing,
        NaturalProperty::Dead,
        NaturalProperty::Itchy,
        NaturalProperty::Glittering,
        NaturalProperty::Electric,
        NaturalProperty::Slimy,
        NaturalProperty::Engraved,
        NaturalProperty::Crackling,
        NaturalProperty::Warm,
        NaturalProperty::Rattling,
        NaturalProperty::Scaled,
        NaturalProperty::Fractal,
    ];

    pub fn data(self) -> &'static PropertyDatum {
        &PROPERTY_DATA[self as usize]
    }

    /// Case-insensitive lookup by display name, e.g. `"glowing"`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|property| property.data().name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_line_up_with_enums() {
        assert_eq!(NaturalShape::Crescent.data().name, "crescent");
        assert_eq!(NaturalShape::Sphere.data().desc, "smooth sphere");
        assert_eq!(NaturalProperty::Fractal.data().name, "fractal");
        assert_eq!(NaturalProperty::Wriggling.data().passive_good[0], P::SpeedUp);
    }

    #[test]
    fn test_property_lookup_by_name() {
        assert_eq!(NaturalProperty::from_name("Glowing"), Some(NaturalProperty::Glowing));
        assert_eq!(NaturalProperty::from_name("dead"), Some(NaturalProperty::Dead));
        assert_eq!(NaturalProperty::from_name("sparkly"), None);
    }
}
