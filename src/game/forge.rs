//! # Artifact Forge
//!
//! Entry point for generating, storing and persisting artifacts.
//!
//! The forge owns the seeded random source, the localizer and the registry,
//! so one forge reproduces the same sequence of artifacts from the same
//! seed. It is not synchronized; callers generate one artifact at a time.

use crate::generation::utils;
use crate::{
    catalog, read_artifacts_file, write_artifacts_file, ArtifactId, ArtifactRecord,
    ArtifactRegistry, ArtificerResult, DebugArtifactGenerator, EnglishText, GenerationConfig,
    Generator, Localizer, NaturalArtifactGenerator, NaturalProperty, RandomArtifactGenerator,
};
use log::{debug, error, info};
use rand::rngs::StdRng;
use std::path::Path;

/// Generation and persistence facade over the artifact registry.
pub struct ArtifactForge {
    registry: ArtifactRegistry,
    rng: StdRng,
    text: Box<dyn Localizer>,
}

impl ArtifactForge {
    /// Creates a forge with English text seeded from `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use artificer::ArtifactForge;
    ///
    /// let mut forge = ArtifactForge::new(7).unwrap();
    /// let id = forge.generate_random_artifact().unwrap();
    /// assert!(forge.get(&id).is_some());
    /// ```
    pub fn new(seed: u64) -> ArtificerResult<Self> {
        Self::from_config(&GenerationConfig::new(seed))
    }

    pub fn from_config(config: &GenerationConfig) -> ArtificerResult<Self> {
        Self::with_localizer(config, Box::new(EnglishText))
    }

    /// Creates a forge that writes names and descriptions through `text`.
    ///
    /// Fails if the configuration is invalid or the static tables do not
    /// pass [`catalog::self_check`].
    pub fn with_localizer(config: &GenerationConfig, text: Box<dyn Localizer>) -> ArtificerResult<Self> {
        config.validate()?;
        catalog::self_check()?;
        info!("Artifact forge ready (seed {})", config.seed);

        Ok(Self {
            registry: ArtifactRegistry::new(),
            rng: utils::create_rng(config),
            text,
        })
    }

    /// Generates a forged tool or armor artifact and registers it.
    pub fn generate_random_artifact(&mut self) -> ArtificerResult<ArtifactId> {
        let generator = RandomArtifactGenerator::new(self.text.as_ref());
        forge_with(&generator, &mut self.rng, &mut self.registry)
    }

    /// Generates a natural artifact and registers it.
    ///
    /// With `None` the property is rolled at random.
    pub fn generate_natural_artifact(&mut self, property: Option<NaturalProperty>) -> ArtificerResult<ArtifactId> {
        let generator = match property {
            Some(property) => NaturalArtifactGenerator::with_property(self.text.as_ref(), property),
            None => NaturalArtifactGenerator::new(self.text.as_ref()),
        };
        forge_with(&generator, &mut self.rng, &mut self.registry)
    }

    /// Generates the architect's cube and registers it.
    pub fn generate_fixed_debug_artifact(&mut self) -> ArtificerResult<ArtifactId> {
        let generator = DebugArtifactGenerator::new(self.text.as_ref());
        forge_with(&generator, &mut self.rng, &mut self.registry)
    }

    /// Loads artifacts saved at `path` into the registry.
    ///
    /// A missing file loads nothing. Returns the number of artifacts read.
    pub fn load_artifacts(&mut self, path: impl AsRef<Path>) -> ArtificerResult<usize> {
        let path = path.as_ref();
        let records = read_artifacts_file(path)?;
        let count = records.len();
        for record in records {
            self.registry.restore(record);
        }
        info!("Loaded {} artifacts from {}", count, path.display());
        Ok(count)
    }

    /// Saves every runtime artifact to `path`.
    ///
    /// Returns false if the file could not be written; the previous save,
    /// if any, is left untouched in that case.
    pub fn save_artifacts(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let records = self.registry.runtime_artifacts();
        match write_artifacts_file(path, records) {
            Ok(()) => {
                info!("Saved {} artifacts to {}", records.len(), path.display());
                true
            }
            Err(err) => {
                error!("Failed to save artifacts to {}: {}", path.display(), err);
                false
            }
        }
    }

    pub fn get(&self, id: &ArtifactId) -> Option<&ArtifactRecord> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &ArtifactRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ArtifactRegistry {
        &mut self.registry
    }
}

fn forge_with<G: Generator<ArtifactRecord>>(
    generator: &G,
    rng: &mut StdRng,
    registry: &mut ArtifactRegistry,
) -> ArtificerResult<ArtifactId> {
    let record = generator.generate(rng)?;
    generator.validate(&record)?;
    let id = registry.register(record);
    debug!("{} produced {}", generator.generator_type(), id);
    Ok(id)
}
