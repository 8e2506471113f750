//! Consistency checks over the static catalog tables.

use artificer::{
    bad_active, bad_passive, catalog, good_active, good_passive, ActiveEffect, ArmorForm,
    ArmorModKind, ArtificerResult, ChargeType, EffectFamily, NaturalProperty, NaturalShape,
    PassiveEffect, ToolForm,
};

#[test]
fn test_self_check() -> ArtificerResult<()> {
    catalog::self_check()
}

#[test]
fn test_every_effect_has_a_unique_name() {
    fn check<E: EffectFamily>() {
        let mut names = std::collections::HashSet::new();
        for index in 0..E::COUNT {
            let effect = E::from_index(index).expect("dense table");
            assert!(names.insert(effect.name()), "duplicate {}", effect.name());
            if effect.is_selectable() {
                assert_eq!(E::from_name(effect.name()), Some(effect));
            }
        }
    }

    check::<PassiveEffect>();
    check::<ActiveEffect>();
}

#[test]
fn test_pools_partition_selectable_effects() {
    assert_eq!(good_passive().len() + bad_passive().len(), PassiveEffect::COUNT - 2);
    assert_eq!(good_active().len() + bad_active().len(), ActiveEffect::COUNT - 2);
    assert!(good_passive().iter().all(|effect| effect.cost() >= 0));
    assert!(bad_passive().iter().all(|effect| effect.cost() <= 0));
}

#[test]
fn test_charge_types_map_both_ways() {
    for charge in ChargeType::ALL {
        assert_eq!(ChargeType::from_name(charge.name()), Some(charge));
        assert_eq!(ChargeType::from_index(charge.index()), Some(charge));
    }
}

#[test]
fn test_table_sizes() {
    assert_eq!(NaturalShape::ALL.len(), 17);
    assert_eq!(NaturalProperty::ALL.len(), 17);
    assert_eq!(ToolForm::ALL.len(), 5);
    assert_eq!(ArmorForm::ALL.len(), 7);
    assert_eq!(ArmorModKind::ALL.len(), 6);
}

#[test]
fn test_natural_shape_ranges_are_ordered() {
    for shape in NaturalShape::ALL {
        let data = shape.data();
        assert!(data.volume_min <= data.volume_max, "{}", data.name);
        assert!(data.weight_min <= data.weight_max, "{}", data.name);
    }
}

#[test]
fn test_natural_modules_resolve_from_crate_root() {
    let shape: artificer::found::NaturalShape = NaturalShape::ALL[0];
    assert!(!shape.data().name.is_empty());
    let layouts = [
        artificer::natural::NaturalLayout::PassivePair,
        artificer::natural::NaturalLayout::ActivePair,
        artificer::natural::NaturalLayout::BadPassiveGoodActive,
    ];
    assert_eq!(layouts.len(), 3);
}
