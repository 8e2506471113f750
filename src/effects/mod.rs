//! # Effects Module
//!
//! Effect identifiers, their power costs and the candidate pools the
//! selection algorithm draws from.
//!
//! Each family lays its identifiers out in one dense range:
//!
//! ```text
//! [0]                 null sentinel, never selected
//! (0, split)          good effects
//! [split]             split sentinel, never selected
//! (split, COUNT)      bad effects
//! ```
//!
//! Costs are looked up in a fixed table indexed by identifier, so the cost
//! function is total over every identifier in a family.

pub mod active;
pub mod charge;
pub mod passive;

pub use active::*;
pub use charge::*;
pub use passive::*;

use std::fmt::Debug;
use std::ops::Range;

/// Shared behaviour of the passive and active effect families.
pub trait EffectFamily: Copy + Eq + Debug + 'static {
    /// The null sentinel at index 0.
    const NULL: Self;
    /// The boundary between the good and bad ranges.
    const SPLIT: Self;
    /// Number of identifiers in the family, sentinels included.
    const COUNT: usize;
    /// Human-readable family name for logs and errors.
    const FAMILY: &'static str;

    /// Dense integer id; also the persisted representation.
    fn index(self) -> usize;

    /// Inverse of [`EffectFamily::index`].
    fn from_index(index: usize) -> Option<Self>;

    /// Power value of the effect.
    fn cost(self) -> i32;

    /// Stable symbolic name.
    fn name(self) -> &'static str;

    /// Looks up a selectable effect by its symbolic name. Sentinels are
    /// rejected.
    fn from_name(name: &str) -> Option<Self> {
        (0..Self::COUNT)
            .filter_map(Self::from_index)
            .filter(|effect| effect.is_selectable())
            .find(|effect| effect.name() == name)
    }

    /// Indices of the good range.
    fn good_range() -> Range<usize> {
        (Self::NULL.index() + 1)..Self::SPLIT.index()
    }

    /// Indices of the bad range.
    fn bad_range() -> Range<usize> {
        (Self::SPLIT.index() + 1)..Self::COUNT
    }

    fn is_good(self) -> bool {
        Self::good_range().contains(&self.index())
    }

    fn is_bad(self) -> bool {
        Self::bad_range().contains(&self.index())
    }

    /// Neither sentinel.
    fn is_selectable(self) -> bool {
        self.is_good() || self.is_bad()
    }
}

/// Every good effect of a family, in identifier order.
///
/// Returns a fresh vector on each call; selection consumes it.
pub fn good_pool<E: EffectFamily>() -> Vec<E> {
    E::good_range().filter_map(E::from_index).collect()
}

/// Every bad effect of a family, in identifier order.
pub fn bad_pool<E: EffectFamily>() -> Vec<E> {
    E::bad_range().filter_map(E::from_index).collect()
}

pub fn good_passive() -> Vec<PassiveEffect> {
    good_pool()
}

pub fn bad_passive() -> Vec<PassiveEffect> {
    bad_pool()
}

pub fn good_active() -> Vec<ActiveEffect> {
    good_pool()
}

pub fn bad_active() -> Vec<ActiveEffect> {
    bad_pool()
}

/// Sum of costs over a list of effects.
pub fn total_cost<E: EffectFamily>(effects: &[E]) -> i32 {
    effects.iter().map(|effect| effect.cost()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(good_passive().len(), 19);
        assert_eq!(bad_passive().len(), 18);
        assert_eq!(good_active().len(), 16);
        assert_eq!(bad_active().len(), 13);
    }

    #[test]
    fn test_pools_exclude_sentinels_and_are_disjoint() {
        let good: HashSet<_> = good_passive().into_iter().collect();
        let bad: HashSet<_> = bad_passive().into_iter().collect();

        assert!(good.is_disjoint(&bad));
        for pool in [&good, &bad] {
            assert!(!pool.contains(&PassiveEffect::Null));
            assert!(!pool.contains(&PassiveEffect::Split));
        }
        assert_eq!(good.len() + bad.len(), PassiveEffect::COUNT - 2);

        let good: HashSet<_> = good_active().into_iter().collect();
        let bad: HashSet<_> = bad_active().into_iter().collect();
        assert!(good.is_disjoint(&bad));
        assert_eq!(good.len() + bad.len(), ActiveEffect::COUNT - 2);
    }

    #[test]
    fn test_pools_are_fresh_each_call() {
        let mut first = good_passive();
        first.clear();
        assert_eq!(good_passive().len(), 19);
        assert_eq!(good_passive().first(), Some(&PassiveEffect::StrUp));
    }

    #[test]
    fn test_names_map_both_ways() {
        for effect in (0..PassiveEffect::COUNT).filter_map(PassiveEffect::from_index) {
            if effect.is_selectable() {
                assert_eq!(PassiveEffect::from_name(effect.name()), Some(effect));
            } else {
                assert_eq!(PassiveEffect::from_name(effect.name()), None);
            }
        }
        for effect in (0..ActiveEffect::COUNT).filter_map(ActiveEffect::from_index) {
            if effect.is_selectable() {
                assert_eq!(ActiveEffect::from_name(effect.name()), Some(effect));
            }
        }

        let names: HashSet<_> = (0..PassiveEffect::COUNT)
            .filter_map(PassiveEffect::from_index)
            .map(|effect| effect.name())
            .collect();
        assert_eq!(names.len(), PassiveEffect::COUNT, "duplicate passive names");
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(PassiveEffect::from_index(PassiveEffect::COUNT), None);
        assert_eq!(ActiveEffect::from_index(ActiveEffect::COUNT), None);
    }

    #[test]
    fn test_total_cost() {
        let effects = [PassiveEffect::StrUp, PassiveEffect::Evil, PassiveEffect::Glow];
        assert_eq!(total_cost(&effects), 3 - 5 + 1);
        assert_eq!(total_cost::<ActiveEffect>(&[]), 0);
    }
}
