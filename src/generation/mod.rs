//! # Generation Module
//!
//! Procedural artifact generation systems.
//!
//! This module provides the budgeted effect selection loop, the natural
//! artifact sampler and the generators that assemble complete artifact
//! records from the catalog tables.

pub mod artifacts;
pub mod natural;
pub mod selection;

pub use artifacts::*;
pub use natural::*;
pub use selection::*;

use crate::{ArtificerError, ArtificerResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for artifact generation.
///
/// Loaded from a JSON file by the command line tool; every field is
/// optional there and falls back to [`GenerationConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// File artifacts are saved to and loaded from
    pub artifact_file: PathBuf,
    /// Number of artifacts generated per batch
    pub batch_size: u32,
}

impl GenerationConfig {
    /// Creates a default generation configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use artificer::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(7);
    /// assert_eq!(config.seed, 7);
    /// assert!(config.batch_size >= 1);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            artifact_file: PathBuf::from(crate::config::DEFAULT_ARTIFACT_FILE),
            batch_size: 1,
        }
    }

    /// Creates a configuration for testing with a larger batch.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            batch_size: 16,
            ..Self::new(seed)
        }
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ArtificerResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: GenerationConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a generation run.
    pub fn validate(&self) -> ArtificerResult<()> {
        if self.batch_size == 0 {
            return Err(ArtificerError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.artifact_file.as_os_str().is_empty() {
            return Err(ArtificerError::InvalidConfig(
                "artifact_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for procedural generators.
///
/// All artifact generators implement this trait, so callers can drive any
/// of them through one seeded random source.
pub trait Generator<T> {
    /// Generates content using the provided random number generator.
    fn generate(&self, rng: &mut StdRng) -> ArtificerResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T) -> ArtificerResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use crate::{ArtifactRecord, ChargeType};

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Validates that an artifact record is internally consistent.
    pub fn validate_artifact(record: &ArtifactRecord) -> ArtificerResult<()> {
        let fail = |reason: String| {
            Err(ArtificerError::GenerationFailed(format!(
                "artifact `{}`: {}",
                record.name(),
                reason
            )))
        };

        if record.name().is_empty() {
            return fail("name is empty".to_string());
        }
        if record.has_sentinel_effects() {
            return fail("effect list holds a sentinel".to_string());
        }

        match record {
            ArtifactRecord::Tool(tool) => {
                if tool.def_charges > tool.max_charges {
                    return fail(format!(
                        "default charges {} exceed maximum {}",
                        tool.def_charges, tool.max_charges
                    ));
                }
                if tool.charge_type != ChargeType::Null && tool.max_charges == 0 {
                    return fail("recharges but holds no charges".to_string());
                }
                if tool.effects_activated.is_empty() != (tool.max_charges == 0) {
                    return fail(format!(
                        "{} active effects with {} charges",
                        tool.effects_activated.len(),
                        tool.max_charges
                    ));
                }
            }
            ArtifactRecord::Armor(armor) => {
                if armor.common.volume.ml() < 0 || armor.common.weight.grams() < 1 {
                    return fail("size fell below its floor".to_string());
                }
                for (stat, value) in [
                    ("coverage", armor.coverage),
                    ("thickness", armor.thickness),
                    ("env_resist", armor.env_resist),
                    ("storage", armor.storage.ml()),
                ] {
                    if value < 0 {
                        return fail(format!("{} is negative ({})", stat, value));
                    }
                }
            }
        }

        Ok(())
    }
}
