//! Integration tests for artifact generation through the forge.

use artificer::{
    encode_artifacts, ArtifactForge, ArtifactRecord, ArtificerResult, ChargeType, EffectFamily,
    NaturalProperty,
};
use std::collections::HashSet;

#[test]
fn test_random_artifacts_are_well_formed() -> ArtificerResult<()> {
    let mut forge = ArtifactForge::new(2024)?;
    let mut tools = 0;
    let mut armor = 0;

    for _ in 0..300 {
        let id = forge.generate_random_artifact()?;
        let record = forge.get(&id).expect("registered artifact");
        assert_eq!(record.id(), &id);
        assert!(!record.has_sentinel_effects());
        assert!(!record.name().is_empty());

        match record {
            ArtifactRecord::Tool(tool) => {
                tools += 1;
                assert!(tool.effects_wielded.len() <= 6);
                assert!(tool.effects_carried.len() <= 6);
                assert!(tool.effects_activated.len() <= 6);
                if tool.max_charges == 0 {
                    assert_eq!(tool.charge_type, ChargeType::Null);
                }
            }
            ArtifactRecord::Armor(piece) => {
                armor += 1;
                assert_eq!(piece.common.sym, "[");
                assert!(piece.common.volume.ml() >= 0);
                assert!(piece.common.weight.grams() >= 1);
                assert!(piece.coverage >= 0 && piece.storage.ml() >= 0);
            }
        }
    }

    // Even odds between the two kinds.
    assert!(tools > 100 && armor > 100, "tools {} armor {}", tools, armor);
    Ok(())
}

#[test]
fn test_effect_lists_never_repeat_within_a_slot() -> ArtificerResult<()> {
    fn unique<E: EffectFamily + std::hash::Hash>(effects: &[E]) -> bool {
        effects.iter().collect::<HashSet<_>>().len() == effects.len()
    }

    let mut forge = ArtifactForge::new(99)?;
    for _ in 0..200 {
        let id = forge.generate_random_artifact()?;
        match forge.get(&id).expect("registered artifact") {
            ArtifactRecord::Tool(tool) => {
                assert!(unique(&tool.effects_wielded));
                assert!(unique(&tool.effects_carried));
                assert!(unique(&tool.effects_activated));
            }
            ArtifactRecord::Armor(armor) => assert!(unique(&armor.effects_worn)),
        }
    }
    Ok(())
}

#[test]
fn test_power_varies_across_batch() -> ArtificerResult<()> {
    let mut forge = ArtifactForge::new(7)?;
    let mut powers = HashSet::new();

    for _ in 0..500 {
        let id = forge.generate_random_artifact()?;
        powers.insert(forge.get(&id).expect("registered artifact").declared_power());
    }

    // Net-positive and net-negative artifacts both show up.
    assert!(powers.iter().any(|power| *power > 0));
    assert!(powers.iter().any(|power| *power < 0));
    assert!(powers.len() > 10);
    Ok(())
}

#[test]
fn test_natural_artifacts_follow_property() -> ArtificerResult<()> {
    let mut forge = ArtifactForge::new(31)?;
    for property in NaturalProperty::ALL {
        let id = forge.generate_natural_artifact(Some(property))?;
        let Some(ArtifactRecord::Tool(tool)) = forge.get(&id) else {
            panic!("natural artifacts are tools");
        };
        assert!(tool.common.name.starts_with(property.data().name));
        assert!(tool.common.description.starts_with("This "));
        assert_eq!(tool.common.sym, ":");
        assert_eq!(tool.effects_carried.len() + tool.effects_activated.len(), 2);
    }
    Ok(())
}

#[test]
fn test_random_natural_property() -> ArtificerResult<()> {
    let mut forge = ArtifactForge::new(32)?;
    let mut names = HashSet::new();
    for _ in 0..60 {
        let id = forge.generate_natural_artifact(None)?;
        names.insert(forge.get(&id).expect("registered artifact").name().to_string());
    }
    assert!(names.len() > 10);
    Ok(())
}

#[test]
fn test_seeded_forges_agree() -> ArtificerResult<()> {
    let mut first = ArtifactForge::new(123)?;
    let mut second = ArtifactForge::new(123)?;
    let mut third = ArtifactForge::new(124)?;
    let mut differs = false;

    for _ in 0..20 {
        let a = first.generate_random_artifact()?;
        let b = second.generate_random_artifact()?;
        let c = third.generate_random_artifact()?;
        assert_eq!(first.get(&a), second.get(&b));
        differs |= first.get(&a).map(|r| r.name()) != third.get(&c).map(|r| r.name());
    }

    assert!(differs);

    // Same seed, same save file down to the byte.
    first.generate_natural_artifact(None)?;
    second.generate_natural_artifact(None)?;
    let first_json = encode_artifacts(first.registry().runtime_artifacts())?;
    let second_json = encode_artifacts(second.registry().runtime_artifacts())?;
    assert_eq!(first_json, second_json);
    assert_ne!(first_json, encode_artifacts(third.registry().runtime_artifacts())?);
    Ok(())
}
