//! # Artificer
//!
//! Procedural, value-balanced generation of unique magical artifacts.
//!
//! ## Architecture Overview
//!
//! Artificer turns a handful of static tables into fully specified artifact
//! records. The pieces, leaves first:
//!
//! - **Effects**: passive and active effect identifiers, their power costs,
//!   and the good/bad candidate pools drawn from during generation
//! - **Catalog**: natural shapes and properties, tool forms, weapon
//!   archetypes, armor forms and armor mods, plus the name word lists
//! - **Generation**: the budgeted selection algorithm and the generators
//!   that assemble tool, armor, natural and debug artifacts
//! - **Game**: the artifact record types, the runtime registry and the
//!   [`ArtifactForge`] facade tying everything to a seeded random source
//! - **Persistence**: the JSON document codec and atomic save/load
//!
//! All randomness flows through an explicit [`rand::rngs::StdRng`] handle, so a
//! seeded forge reproduces its output exactly.

pub mod catalog;
pub mod effects;
pub mod game;
pub mod generation;
pub mod persistence;
pub mod utils;

pub use catalog::*;
pub use effects::*;
pub use game::*;
pub use generation::*;
pub use persistence::*;
pub use utils::*;

/// Core error type for the Artificer engine.
#[derive(thiserror::Error, Debug)]
pub enum ArtificerError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A persisted artifact carries a `type` this crate does not know
    #[error("artifact {index}: unrecognized artifact type `{found}` (field `type`)")]
    UnrecognizedArtifactType { index: usize, found: String },

    /// A persisted artifact lacks a required field
    #[error("artifact {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A persisted artifact failed to decode
    #[error("artifact {index}: {source}")]
    MalformedArtifact {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// An effect list holds an integer that is not a selectable effect
    #[error("invalid effect id {value} in field `{field}`")]
    InvalidEffect { field: &'static str, value: i64 },

    /// The charge type integer does not name a recharge mechanism
    #[error("invalid charge type {0} (field `charge_type`)")]
    InvalidChargeType(i64),

    /// Static tables failed the self-check
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Configuration could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type used throughout the Artificer codebase.
pub type ArtificerResult<T> = Result<T, ArtificerError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation constants.
///
/// These are flavor values tuned by hand; they are not derived from the
/// effect cost model.
pub mod config {
    /// Maximum good effects a single selection run may pick
    pub const MAX_GOOD_EFFECTS: u32 = 3;

    /// Maximum bad effects a single selection run may pick
    pub const MAX_BAD_EFFECTS: u32 = 3;

    /// Volume an armor piece is floored to when a mod would make it negative (ml)
    pub const ARMOR_VOLUME_FLOOR_ML: i32 = 250;

    /// Weight an armor piece is floored to when a mod would make it negative (g)
    pub const ARMOR_WEIGHT_FLOOR_G: i32 = 1;

    /// A heavily enchanted tool loses its recharge mechanism one time in this many
    pub const CURSE_ONE_IN: u32 = 8;

    /// Minimum combined effect count before the recharge curse can apply
    pub const CURSE_MIN_EFFECTS: u32 = 4;

    /// Default file artifacts are saved to
    pub const DEFAULT_ARTIFACT_FILE: &str = "artifacts.json";
}
