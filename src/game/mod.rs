//! # Game Module
//!
//! Artifact records and the services that own them.
//!
//! This module contains:
//! - The artifact record sum type and its tool/armor variants
//! - The runtime registry generated artifacts are handed to
//! - The [`ArtifactForge`] facade exposing the generation and persistence API
//! - Small value types shared by records: ids, colors and body-part sets

pub mod artifact;
pub mod forge;
pub mod registry;

pub use artifact::*;
pub use forge::*;
pub use registry::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of an artifact item type.
///
/// # Examples
///
/// ```
/// use artificer::ArtifactId;
///
/// let id = ArtifactId::new("artifact_3");
/// assert_eq!(id.as_str(), "artifact_3");
/// assert_eq!(id.sequence(), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    /// Prefix of ids allocated by the registry.
    pub const PREFIX: &'static str = "artifact_";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the id for the N-th runtime artifact.
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("{}{}", Self::PREFIX, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric suffix of a registry-allocated id.
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display colors used by artifact records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    White,
    Yellow,
    Brown,
    LightBlue,
    Red,
    DarkGray,
    Blue,
    LightGreen,
}

/// Body locations armor can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BodyPart {
    Torso = 0,
    Head,
    Eyes,
    Mouth,
    ArmL,
    ArmR,
    HandL,
    HandR,
    LegL,
    LegR,
    FootL,
    FootR,
}

impl BodyPart {
    pub const ALL: [BodyPart; 12] = [
        BodyPart::Torso,
        BodyPart::Head,
        BodyPart::Eyes,
        BodyPart::Mouth,
        BodyPart::ArmL,
        BodyPart::ArmR,
        BodyPart::HandL,
        BodyPart::HandR,
        BodyPart::LegL,
        BodyPart::LegR,
        BodyPart::FootL,
        BodyPart::FootR,
    ];

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Set of covered body parts, persisted as an integer bit mask.
///
/// # Examples
///
/// ```
/// use artificer::{BodyPart, BodyParts};
///
/// let gloves = BodyParts::of(&[BodyPart::HandL, BodyPart::HandR]);
/// assert!(gloves.contains(BodyPart::HandL));
/// assert!(!gloves.contains(BodyPart::Head));
/// assert_eq!(gloves.bits(), 0b1100_0000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyParts(u16);

impl BodyParts {
    pub const NONE: BodyParts = BodyParts(0);

    pub const fn of(parts: &[BodyPart]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < parts.len() {
            bits |= parts[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, part: BodyPart) -> bool {
        self.0 & part.bit() != 0
    }

    pub fn insert(&mut self, part: BodyPart) {
        self.0 |= part.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = BodyPart> {
        BodyPart::ALL.into_iter().filter(move |part| self.contains(*part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_id_sequence() {
        assert_eq!(ArtifactId::from_sequence(12).as_str(), "artifact_12");
        assert_eq!(ArtifactId::from_sequence(12).sequence(), Some(12));
        assert_eq!(ArtifactId::new("architects_cube").sequence(), None);
        assert_eq!(ArtifactId::new("artifact_x").sequence(), None);
    }

    #[test]
    fn test_body_parts_set_operations() {
        let mut parts = BodyParts::NONE;
        assert!(parts.is_empty());

        parts.insert(BodyPart::Torso);
        parts.insert(BodyPart::LegL);
        parts.insert(BodyPart::Torso);

        assert_eq!(parts.iter().collect::<Vec<_>>(), vec![BodyPart::Torso, BodyPart::LegL]);
        assert_eq!(BodyParts::from_bits(parts.bits()), parts);
    }

    #[test]
    fn test_color_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Color::LightBlue).unwrap(), "\"light_blue\"");
        let color: Color = serde_json::from_str("\"dark_gray\"").unwrap();
        assert_eq!(color, Color::DarkGray);
    }
}
