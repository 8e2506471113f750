//! # Persistence Module
//!
//! JSON codec for artifact records.
//!
//! A save file is a JSON array with one object per runtime artifact. Each
//! object carries a `type` of `artifact_tool` or `artifact_armor` that
//! selects its layout. Effect lists and the charge type are stored as
//! their integer ids. Volumes are millilitres and weights grams.
//!
//! Older saves are accepted too: a material list split into `m1`/`m2`
//! strings, an integer `sym` code, and documents without `melee_stab` or
//! `plural`.

use crate::{
    ArmorArtifact, ArtifactCommon, ArtifactId, ArtifactRecord, ArtificerError, ArtificerResult,
    BodyParts, ChargeType, Color, EffectFamily, Mass, ToolArtifact, Volume,
};
use log::debug;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

pub const TOOL_TYPE: &str = "artifact_tool";
pub const ARMOR_TYPE: &str = "artifact_armor";

/// Fields shared by both document layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonDocument {
    pub id: ArtifactId,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_sym")]
    pub sym: String,
    pub color: Color,
    pub price: i32,
    #[serde(default, skip_serializing)]
    pub m1: Option<String>,
    #[serde(default, skip_serializing)]
    pub m2: Option<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    pub volume: Volume,
    pub weight: Mass,
    pub melee_dam: i32,
    pub melee_cut: i32,
    #[serde(default)]
    pub melee_stab: i32,
    pub m_to_hit: i32,
    #[serde(default)]
    pub item_flags: BTreeSet<String>,
    #[serde(default)]
    pub techniques: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDocument {
    #[serde(flatten)]
    pub common: CommonDocument,
    pub ammo: String,
    pub max_charges: i32,
    pub def_charges: i32,
    pub charges_per_use: i32,
    pub turns_per_charge: i32,
    pub revert_to: String,
    pub charge_type: i64,
    pub effects_wielded: Vec<i64>,
    pub effects_activated: Vec<i64>,
    pub effects_carried: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorDocument {
    #[serde(flatten)]
    pub common: CommonDocument,
    pub covers: BodyParts,
    pub encumber: i32,
    pub coverage: i32,
    pub material_thickness: i32,
    pub env_resist: i32,
    pub warmth: i32,
    pub storage: Volume,
    pub power_armor: bool,
    #[serde(default)]
    pub plural: bool,
    pub effects_worn: Vec<i64>,
}

/// A document as written, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ArtifactDocument {
    #[serde(rename = "artifact_tool")]
    Tool(ToolDocument),
    #[serde(rename = "artifact_armor")]
    Armor(ArmorDocument),
}

fn deserialize_sym<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Sym {
        Code(u32),
        Glyph(String),
    }

    match Sym::deserialize(deserializer)? {
        Sym::Glyph(glyph) => Ok(glyph),
        Sym::Code(code) => char::from_u32(code)
            .map(String::from)
            .ok_or_else(|| de::Error::custom(format!("invalid sym code {}", code))),
    }
}

fn encode_effects<E: EffectFamily>(effects: &[E]) -> Vec<i64> {
    effects.iter().map(|effect| effect.index() as i64).collect()
}

fn decode_effects<E: EffectFamily>(field: &'static str, raw: &[i64]) -> ArtificerResult<Vec<E>> {
    raw.iter()
        .map(|&value| {
            usize::try_from(value)
                .ok()
                .and_then(E::from_index)
                .filter(|effect| effect.is_selectable())
                .ok_or(ArtificerError::InvalidEffect { field, value })
        })
        .collect()
}

impl CommonDocument {
    fn from_common(common: &ArtifactCommon) -> Self {
        Self {
            id: common.id.clone(),
            name: common.name.clone(),
            description: common.description.clone(),
            sym: common.sym.clone(),
            color: common.color,
            price: common.price,
            m1: None,
            m2: None,
            materials: common.materials.clone(),
            volume: common.volume,
            weight: common.weight,
            melee_dam: common.melee_bash,
            melee_cut: common.melee_cut,
            melee_stab: common.melee_stab,
            m_to_hit: common.to_hit,
            item_flags: common.item_flags.clone(),
            techniques: common.techniques.clone(),
        }
    }

    fn into_common(self) -> ArtifactCommon {
        // Legacy singular fields come first; a document should only carry
        // one of the two shapes.
        let mut materials: Vec<String> = self.m1.into_iter().chain(self.m2).collect();
        materials.extend(self.materials);

        ArtifactCommon {
            id: self.id,
            name: self.name,
            description: self.description,
            sym: self.sym,
            color: self.color,
            price: self.price,
            materials,
            volume: self.volume,
            weight: self.weight,
            melee_bash: self.melee_dam,
            melee_cut: self.melee_cut,
            melee_stab: self.melee_stab,
            to_hit: self.m_to_hit,
            item_flags: self.item_flags,
            techniques: self.techniques,
        }
    }
}

impl ToolDocument {
    pub fn from_tool(tool: &ToolArtifact) -> Self {
        Self {
            common: CommonDocument::from_common(&tool.common),
            ammo: tool.ammo.clone(),
            max_charges: tool.max_charges,
            def_charges: tool.def_charges,
            charges_per_use: tool.charges_per_use,
            turns_per_charge: tool.turns_per_charge,
            revert_to: tool.revert_to.clone(),
            charge_type: tool.charge_type.index() as i64,
            effects_wielded: encode_effects(&tool.effects_wielded),
            effects_activated: encode_effects(&tool.effects_activated),
            effects_carried: encode_effects(&tool.effects_carried),
        }
    }

    pub fn into_tool(self) -> ArtificerResult<ToolArtifact> {
        let charge_type = usize::try_from(self.charge_type)
            .ok()
            .and_then(ChargeType::from_index)
            .ok_or(ArtificerError::InvalidChargeType(self.charge_type))?;

        Ok(ToolArtifact {
            effects_wielded: decode_effects("effects_wielded", &self.effects_wielded)?,
            effects_activated: decode_effects("effects_activated", &self.effects_activated)?,
            effects_carried: decode_effects("effects_carried", &self.effects_carried)?,
            common: self.common.into_common(),
            ammo: self.ammo,
            max_charges: self.max_charges,
            def_charges: self.def_charges,
            charges_per_use: self.charges_per_use,
            turns_per_charge: self.turns_per_charge,
            revert_to: self.revert_to,
            charge_type,
        })
    }
}

impl ArmorDocument {
    pub fn from_armor(armor: &ArmorArtifact) -> Self {
        Self {
            common: CommonDocument::from_common(&armor.common),
            covers: armor.covers,
            encumber: armor.encumber,
            coverage: armor.coverage,
            material_thickness: armor.thickness,
            env_resist: armor.env_resist,
            warmth: armor.warmth,
            storage: armor.storage,
            power_armor: armor.power_armor,
            plural: armor.plural,
            effects_worn: encode_effects(&armor.effects_worn),
        }
    }

    pub fn into_armor(self) -> ArtificerResult<ArmorArtifact> {
        Ok(ArmorArtifact {
            effects_worn: decode_effects("effects_worn", &self.effects_worn)?,
            common: self.common.into_common(),
            covers: self.covers,
            encumber: self.encumber,
            coverage: self.coverage,
            thickness: self.material_thickness,
            env_resist: self.env_resist,
            warmth: self.warmth,
            storage: self.storage,
            power_armor: self.power_armor,
            plural: self.plural,
        })
    }
}

impl From<&ArtifactRecord> for ArtifactDocument {
    fn from(record: &ArtifactRecord) -> Self {
        match record {
            ArtifactRecord::Tool(tool) => ArtifactDocument::Tool(ToolDocument::from_tool(tool)),
            ArtifactRecord::Armor(armor) => ArtifactDocument::Armor(ArmorDocument::from_armor(armor)),
        }
    }
}

/// Serializes records to a pretty-printed JSON array.
pub fn encode_artifacts(records: &[ArtifactRecord]) -> ArtificerResult<String> {
    let documents: Vec<ArtifactDocument> = records.iter().map(ArtifactDocument::from).collect();
    Ok(serde_json::to_string_pretty(&documents)?)
}

/// Parses a JSON array of artifact documents.
///
/// The first bad element aborts the whole decode; its position is reported
/// in the error.
pub fn decode_artifacts(json: &str) -> ArtificerResult<Vec<ArtifactRecord>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_artifact(index, value))
        .collect()
}

fn decode_artifact(index: usize, value: Value) -> ArtificerResult<ArtifactRecord> {
    let tag = match value.get("type") {
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => {
            return Err(ArtificerError::UnrecognizedArtifactType {
                index,
                found: other.to_string(),
            })
        }
        None => return Err(ArtificerError::MissingField { index, field: "type" }),
    };
    let malformed = |source| ArtificerError::MalformedArtifact { index, source };

    match tag.as_str() {
        TOOL_TYPE => {
            let document: ToolDocument = serde_json::from_value(value).map_err(malformed)?;
            document.into_tool().map(ArtifactRecord::Tool)
        }
        ARMOR_TYPE => {
            let document: ArmorDocument = serde_json::from_value(value).map_err(malformed)?;
            document.into_armor().map(ArtifactRecord::Armor)
        }
        _ => Err(ArtificerError::UnrecognizedArtifactType { index, found: tag }),
    }
}

/// Writes records to `path`, replacing the file in one step.
///
/// The array is written to a temporary file next to `path` and renamed over
/// it, so readers see either the old or the new save, never a partial one.
pub fn write_artifacts_file(path: impl AsRef<Path>, records: &[ArtifactRecord]) -> ArtificerResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let documents: Vec<ArtifactDocument> = records.iter().map(ArtifactDocument::from).collect();
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut file, &documents)?;
    file.write_all(b"\n")?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| ArtificerError::Io(err.error))?;

    debug!("Wrote {} artifacts to {}", records.len(), path.display());
    Ok(())
}

/// Reads records from `path`. A missing or blank file holds no artifacts.
pub fn read_artifacts_file(path: impl AsRef<Path>) -> ArtificerResult<Vec<ArtifactRecord>> {
    let path = path.as_ref();
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("No artifact file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    decode_artifacts(&json)
}
