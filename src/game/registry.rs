//! # Artifact Registry
//!
//! Runtime store for artifact item types. Generated and loaded artifacts are
//! moved in here and kept for the rest of the session.

use crate::{ArtifactId, ArtifactRecord};
use log::warn;
use std::collections::HashMap;

/// Ordered store of artifact records.
///
/// Runtime artifacts (generated or loaded from a save) are the ones written
/// back out on save. Static artifacts come from predefined content and are
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct ArtifactRegistry {
    runtime: Vec<ArtifactRecord>,
    statics: Vec<ArtifactRecord>,
    index: HashMap<ArtifactId, Slot>,
    next_sequence: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Runtime(usize),
    Static(usize),
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh id, stamps it on the record and stores it.
    pub fn register(&mut self, mut record: ArtifactRecord) -> ArtifactId {
        let id = self.allocate_id();
        record.common_mut().id = id.clone();
        self.insert_runtime(record);
        id
    }

    /// Stores a record under its existing id, as when loading a save.
    ///
    /// A record with an id already present replaces the previous one.
    pub fn restore(&mut self, record: ArtifactRecord) -> ArtifactId {
        let id = record.id().clone();
        if let Some(sequence) = id.sequence() {
            self.next_sequence = self.next_sequence.max(sequence + 1);
        }
        self.insert_runtime(record);
        id
    }

    /// Stores predefined content that is never written to a save.
    ///
    /// An id already held by a runtime artifact keeps the runtime record;
    /// the static definition is dropped.
    pub fn add_static(&mut self, record: ArtifactRecord) -> ArtifactId {
        let id = record.id().clone();
        match self.index.get(&id).copied() {
            Some(Slot::Static(position)) => {
                warn!("Replacing static artifact {}", id);
                self.statics[position] = record;
            }
            Some(Slot::Runtime(_)) => {
                warn!("Ignoring static artifact {}, id is already in use", id);
            }
            None => {
                self.index.insert(id.clone(), Slot::Static(self.statics.len()));
                self.statics.push(record);
            }
        }
        id
    }

    pub fn get(&self, id: &ArtifactId) -> Option<&ArtifactRecord> {
        match self.index.get(id)? {
            Slot::Runtime(position) => self.runtime.get(*position),
            Slot::Static(position) => self.statics.get(*position),
        }
    }

    pub fn contains(&self, id: &ArtifactId) -> bool {
        self.index.contains_key(id)
    }

    /// Runtime artifacts in insertion order.
    pub fn runtime_artifacts(&self) -> &[ArtifactRecord] {
        &self.runtime
    }

    pub fn len(&self) -> usize {
        self.runtime.len() + self.statics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn allocate_id(&mut self) -> ArtifactId {
        loop {
            let id = ArtifactId::from_sequence(self.next_sequence);
            self.next_sequence += 1;
            if !self.index.contains_key(&id) {
                return id;
            }
        }
    }

    fn insert_runtime(&mut self, record: ArtifactRecord) {
        let id = record.id().clone();
        match self.index.get(&id).copied() {
            Some(Slot::Runtime(position)) => {
                warn!("Duplicate artifact id {}, replacing previous definition", id);
                self.runtime[position] = record;
            }
            Some(Slot::Static(_)) => {
                warn!("Artifact {} shadows a static artifact", id);
                self.index.insert(id, Slot::Runtime(self.runtime.len()));
                self.runtime.push(record);
            }
            None => {
                self.index.insert(id, Slot::Runtime(self.runtime.len()));
                self.runtime.push(record);
            }
        }
    }
}
