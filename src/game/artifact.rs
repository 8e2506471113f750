//! # Artifact Records
//!
//! The finished output of generation. A record is built once, handed to the
//! registry and never mutated afterwards.

use crate::{
    total_cost, ActiveEffect, ArtifactId, BodyParts, ChargeType, Color, EffectFamily, Mass,
    PassiveEffect, Volume,
};
use std::collections::BTreeSet;

/// Fields every artifact carries regardless of variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCommon {
    pub id: ArtifactId,
    pub name: String,
    pub description: String,
    /// Map glyph
    pub sym: String,
    pub color: Color,
    pub price: i32,
    /// Material ids, primary first
    pub materials: Vec<String>,
    pub volume: Volume,
    pub weight: Mass,
    pub melee_bash: i32,
    pub melee_cut: i32,
    pub melee_stab: i32,
    pub to_hit: i32,
    pub item_flags: BTreeSet<String>,
    pub techniques: Vec<String>,
}

impl ArtifactCommon {
    /// Blank common block with the given glyph and color.
    pub fn new(sym: impl Into<String>, color: Color) -> Self {
        Self {
            id: ArtifactId::default(),
            name: String::new(),
            description: String::new(),
            sym: sym.into(),
            color,
            price: 0,
            materials: Vec::new(),
            volume: Volume::ZERO,
            weight: Mass::ZERO,
            melee_bash: 0,
            melee_cut: 0,
            melee_stab: 0,
            to_hit: 0,
            item_flags: BTreeSet::new(),
            techniques: Vec::new(),
        }
    }
}

/// A tool artifact: wielded, carried and activated effects plus charges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolArtifact {
    pub common: ArtifactCommon,
    pub ammo: String,
    pub max_charges: i32,
    pub def_charges: i32,
    pub charges_per_use: i32,
    pub turns_per_charge: i32,
    pub revert_to: String,
    pub charge_type: ChargeType,
    pub effects_wielded: Vec<PassiveEffect>,
    pub effects_carried: Vec<PassiveEffect>,
    pub effects_activated: Vec<ActiveEffect>,
}

impl ToolArtifact {
    pub fn new(common: ArtifactCommon) -> Self {
        Self {
            common,
            ammo: "NULL".to_string(),
            max_charges: 0,
            def_charges: 0,
            charges_per_use: 1,
            turns_per_charge: 0,
            revert_to: "null".to_string(),
            charge_type: ChargeType::Null,
            effects_wielded: Vec::new(),
            effects_carried: Vec::new(),
            effects_activated: Vec::new(),
        }
    }

    /// Sum of effect costs over all three lists.
    pub fn declared_power(&self) -> i32 {
        total_cost(&self.effects_wielded)
            + total_cost(&self.effects_carried)
            + total_cost(&self.effects_activated)
    }

    pub fn effect_count(&self) -> usize {
        self.effects_wielded.len() + self.effects_carried.len() + self.effects_activated.len()
    }
}

/// An armor artifact: a protective stat block plus worn effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorArtifact {
    pub common: ArtifactCommon,
    pub covers: BodyParts,
    pub encumber: i32,
    pub coverage: i32,
    pub thickness: i32,
    pub env_resist: i32,
    pub warmth: i32,
    pub storage: Volume,
    pub power_armor: bool,
    /// Named in the plural ("They are ...")
    pub plural: bool,
    pub effects_worn: Vec<PassiveEffect>,
}

impl ArmorArtifact {
    pub fn declared_power(&self) -> i32 {
        total_cost(&self.effects_worn)
    }

    pub fn effect_count(&self) -> usize {
        self.effects_worn.len()
    }
}

/// A generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactRecord {
    Tool(ToolArtifact),
    Armor(ArmorArtifact),
}

impl ArtifactRecord {
    pub fn common(&self) -> &ArtifactCommon {
        match self {
            ArtifactRecord::Tool(tool) => &tool.common,
            ArtifactRecord::Armor(armor) => &armor.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut ArtifactCommon {
        match self {
            ArtifactRecord::Tool(tool) => &mut tool.common,
            ArtifactRecord::Armor(armor) => &mut armor.common,
        }
    }

    pub fn id(&self) -> &ArtifactId {
        &self.common().id
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    /// The persisted `type` tag of this variant.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ArtifactRecord::Tool(_) => "artifact_tool",
            ArtifactRecord::Armor(_) => "artifact_armor",
        }
    }

    pub fn declared_power(&self) -> i32 {
        match self {
            ArtifactRecord::Tool(tool) => tool.declared_power(),
            ArtifactRecord::Armor(armor) => armor.declared_power(),
        }
    }

    pub fn effect_count(&self) -> usize {
        match self {
            ArtifactRecord::Tool(tool) => tool.effect_count(),
            ArtifactRecord::Armor(armor) => armor.effect_count(),
        }
    }

    /// True if any effect list holds a null or split sentinel.
    pub fn has_sentinel_effects(&self) -> bool {
        fn any_sentinel<E: EffectFamily>(effects: &[E]) -> bool {
            effects.iter().any(|effect| !effect.is_selectable())
        }

        match self {
            ArtifactRecord::Tool(tool) => {
                any_sentinel(&tool.effects_wielded)
                    || any_sentinel(&tool.effects_carried)
                    || any_sentinel(&tool.effects_activated)
            }
            ArtifactRecord::Armor(armor) => any_sentinel(&armor.effects_worn),
        }
    }
}

impl From<ToolArtifact> for ArtifactRecord {
    fn from(tool: ToolArtifact) -> Self {
        ArtifactRecord::Tool(tool)
    }
}

impl From<ArmorArtifact> for ArtifactRecord {
    fn from(armor: ArmorArtifact) -> Self {
        ArtifactRecord::Armor(armor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tool() -> ToolArtifact {
        let mut tool = ToolArtifact::new(ArtifactCommon::new("*", Color::White));
        tool.effects_wielded = vec![PassiveEffect::StrUp, PassiveEffect::Hunger];
        tool.effects_carried = vec![PassiveEffect::Smoke];
        tool.effects_activated = vec![ActiveEffect::Heal];
        tool
    }

    #[test]
    fn test_tool_defaults() {
        let tool = ToolArtifact::new(ArtifactCommon::new("/", Color::Brown));
        assert_eq!(tool.charges_per_use, 1);
        assert_eq!(tool.charge_type, ChargeType::Null);
        assert_eq!(tool.common.price, 0);
        assert!(tool.common.id.is_empty());
    }

    #[test]
    fn test_declared_power_sums_all_lists() {
        let tool = sample_tool();
        // 3 - 2 - 1 + 4
        assert_eq!(tool.declared_power(), 4);
        assert_eq!(tool.effect_count(), 4);

        let record = ArtifactRecord::from(tool);
        assert_eq!(record.declared_power(), 4);
        assert_eq!(record.type_tag(), "artifact_tool");
        assert!(!record.has_sentinel_effects());
    }

    #[test]
    fn test_sentinel_detection() {
        let mut tool = sample_tool();
        tool.effects_carried.push(PassiveEffect::Split);
        assert!(ArtifactRecord::Tool(tool).has_sentinel_effects());
    }
}
