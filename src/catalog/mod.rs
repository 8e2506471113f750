//! # Catalog Module
//!
//! Immutable content tables: natural shapes and properties, tool forms,
//! weapon archetypes, armor forms, armor mods and name word lists.
//!
//! Tables are plain `const` arrays indexed by their enum's discriminant.
//! [`self_check`] verifies they are internally consistent; the forge runs it
//! once on construction.

pub mod armor;
pub mod found;
pub mod names;
pub mod tools;

pub use armor::*;
pub use found::*;
pub use names::*;
pub use tools::*;

use crate::{ActiveEffect, ArtificerError, ArtificerResult, EffectFamily, PassiveEffect};
use log::debug;

/// Validates every static table.
///
/// Problems are configuration bugs, so all of them are collected and
/// reported together.
pub fn self_check() -> ArtificerResult<()> {
    let mut problems = Vec::new();

    check_family::<PassiveEffect>(&mut problems);
    check_family::<ActiveEffect>(&mut problems);

    for shape in NaturalShape::ALL {
        let data = shape.data();
        if data.volume_min > data.volume_max || data.weight_min > data.weight_max {
            problems.push(format!("shape `{}` has a reversed size range", data.name));
        }
    }

    for property in NaturalProperty::ALL {
        let data = property.data();
        check_hints(data.name, "passive_good", &data.passive_good, true, &mut problems);
        check_hints(data.name, "passive_bad", &data.passive_bad, false, &mut problems);
        check_hints(data.name, "active_good", &data.active_good, true, &mut problems);
        check_hints(data.name, "active_bad", &data.active_bad, false, &mut problems);
    }

    for weapon in WeaponKind::ALL {
        let data = weapon.data();
        for (stat, (min, max)) in [
            ("bash", data.bash),
            ("cut", data.cut),
            ("stab", data.stab),
            ("to_hit", data.to_hit),
        ] {
            if min > max {
                problems.push(format!("weapon `{}` has a reversed {} range", data.adjective, stat));
            }
        }
    }

    for form in ToolForm::ALL {
        let data = form.data();
        if data.volume_min > data.volume_max || data.weight_min > data.weight_max {
            problems.push(format!("tool form `{}` has a reversed size range", data.name));
        }
    }

    for form in ArmorForm::ALL {
        let data = form.data();
        if data.coverage < 0 || data.coverage > 100 {
            problems.push(format!("armor form `{}` has coverage {}", data.name, data.coverage));
        }
    }

    for template in ARTIFACT_NOUNS {
        if template.matches("%s").count() != 1 {
            problems.push(format!("noun template `{}` must hold exactly one %s", template));
        }
    }

    if problems.is_empty() {
        debug!("Catalog self-check passed");
        Ok(())
    } else {
        Err(ArtificerError::Catalog(problems.join("; ")))
    }
}

fn check_family<E: EffectFamily>(problems: &mut Vec<String>) {
    for index in 0..E::COUNT {
        let Some(effect) = E::from_index(index) else {
            problems.push(format!("{} effect table has no entry {}", E::FAMILY, index));
            continue;
        };
        if effect.index() != index {
            problems.push(format!("{} effect {:?} sits at slot {}", E::FAMILY, effect, index));
        }
        let cost = effect.cost();
        if !effect.is_selectable() && cost != 0 {
            problems.push(format!("{} sentinel {:?} costs {}", E::FAMILY, effect, cost));
        }
        if effect.is_good() && cost < 0 {
            problems.push(format!("good {} effect {:?} costs {}", E::FAMILY, effect, cost));
        }
        if effect.is_bad() && cost > 0 {
            problems.push(format!("bad {} effect {:?} costs {}", E::FAMILY, effect, cost));
        }
    }
    if E::NULL.index() != 0 {
        problems.push(format!("{} null sentinel is not at index 0", E::FAMILY));
    }
}

fn check_hints<E: EffectFamily>(
    property: &str,
    slot: &str,
    hints: &[E],
    good: bool,
    problems: &mut Vec<String>,
) {
    for hint in hints.iter().filter(|hint| **hint != E::NULL) {
        let in_range = if good { hint.is_good() } else { hint.is_bad() };
        if !in_range {
            problems.push(format!("property `{}` {} hint {:?} is out of range", property, slot, hint));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_check_passes() {
        assert!(self_check().is_ok(), "{:?}", self_check());
    }

    #[test]
    fn test_hint_check_flags_wrong_range() {
        let mut problems = Vec::new();
        check_hints(
            "test",
            "passive_good",
            &[PassiveEffect::Evil, PassiveEffect::Null],
            true,
            &mut problems,
        );
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("Evil"));
    }
}
