//! # Name Word Lists
//!
//! Tool and armor artifacts are named "<Form> of <phrase>", where the phrase
//! is a noun template filled with an adjective, e.g. "Staff of the Forgotten
//! City".

pub const ARTIFACT_ADJECTIVES: [&str; 20] = [
    "Forbidden",
    "Unknown",
    "Forgotten",
    "Hideous",
    "Eldritch",
    "Gelatinous",
    "Ancient",
    "Cursed",
    "Bloody",
    "Undying",
    "Shadowy",
    "Silent",
    "Cyclopean",
    "Fungal",
    "Unspeakable",
    "Grotesque",
    "Frigid",
    "Shattered",
    "Sleeping",
    "Repellent",
];

/// Each template holds exactly one `%s` for the adjective.
pub const ARTIFACT_NOUNS: [&str; 20] = [
    "%s Technique",
    "%s Dreams",
    "%s Beasts",
    "%s Evil",
    "%s Miasma",
    "the %s Abyss",
    "the %s City",
    "%s Shadows",
    "%s Shade",
    "%s Illusion",
    "%s Justice",
    "the %s Necropolis",
    "%s Ichor",
    "the %s Monolith",
    "%s Aeons",
    "%s Graves",
    "%s Horrors",
    "%s Suffering",
    "%s Death",
    "%s Horror",
];

/// "<form> of <phrase>"
pub const TYPE_OF_PHRASE: &str = "%1$s of %2$s";

/// "<property> <shape>"
pub const PROPERTY_SHAPE: &str = "%1$s %2$s";

/// "<adjective> <form>" for tools fused with an extra weapon
pub const WEAPON_ADJECTIVE_FORM: &str = "%1$s %2$s";

pub const TOOL_DESCRIPTION: &str =
    "This is the %s.\nIt is the only one of its kind.\nIt may have unknown powers; try activating them.";

pub const ARMOR_DESCRIPTION: &str = "This is the %s.\nIt is the only one of its kind.";

pub const ARMOR_DESCRIPTION_PLURAL: &str = "This is the %s.\nThey are the only ones of their kind.";

pub const ARMOR_MOD_SUFFIX: &str = "\nIt is %s";

pub const ARMOR_MOD_SUFFIX_PLURAL: &str = "\nThey are %s";

/// "This <shape description> <property description>."
pub const NATURAL_DESCRIPTION: &str = "This %1$s %2$s.";

pub const ARCHITECTS_CUBE_DESCRIPTION: &str = "The architect's cube.";
