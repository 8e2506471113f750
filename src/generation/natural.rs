//! # Natural Artifact Generation
//!
//! Found-object artifacts pair a shape with a property. Their effects come
//! from a small rejection sampler rather than the pool-draining selection
//! used for tools and armor: each attempt picks at most one effect per
//! family slot, preferring the property's hints, and is accepted once its
//! combined cost fits under a threshold that grows by one per attempt.

use super::{utils, Generator};
use crate::catalog::names::{NATURAL_DESCRIPTION, PROPERTY_SHAPE};
use crate::{
    ActiveEffect, ArtifactCommon, ArtifactRecord, ArtificerError, ArtificerResult,
    ChargeType, Color, Dice, EffectFamily, Localizer, Mass, NaturalProperty,
    NaturalShape, PassiveEffect, ToolArtifact, Volume,
};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Which effect slots a natural artifact fills. Exactly one layout is
/// rolled per artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaturalLayout {
    /// Good passive and bad passive
    PassivePair,
    /// Good active and bad active
    ActivePair,
    /// Bad passive and good active
    BadPassiveGoodActive,
}

impl NaturalLayout {
    pub const ALL: [NaturalLayout; 3] = [
        NaturalLayout::PassivePair,
        NaturalLayout::ActivePair,
        NaturalLayout::BadPassiveGoodActive,
    ];

    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.rng(1, 3) {
            1 => NaturalLayout::PassivePair,
            2 => NaturalLayout::ActivePair,
            _ => NaturalLayout::BadPassiveGoodActive,
        }
    }

    fn good_passive(self) -> bool {
        self == NaturalLayout::PassivePair
    }

    fn bad_passive(self) -> bool {
        matches!(self, NaturalLayout::PassivePair | NaturalLayout::BadPassiveGoodActive)
    }

    fn good_active(self) -> bool {
        matches!(self, NaturalLayout::ActivePair | NaturalLayout::BadPassiveGoodActive)
    }

    fn bad_active(self) -> bool {
        self == NaturalLayout::ActivePair
    }
}

/// Accepted picks of the natural sampler. Unused slots hold the null
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalPicks {
    pub passive_good: PassiveEffect,
    pub passive_bad: PassiveEffect,
    pub active_good: ActiveEffect,
    pub active_bad: ActiveEffect,
    /// Combined cost of the accepted picks
    pub value: i32,
    /// Number of attempts until acceptance
    pub attempts: u32,
}

impl NaturalPicks {
    /// Non-null passive picks, good first.
    pub fn passive(&self) -> Vec<PassiveEffect> {
        [self.passive_good, self.passive_bad]
            .into_iter()
            .filter(|effect| *effect != PassiveEffect::Null)
            .collect()
    }

    /// Non-null active picks, good first.
    pub fn active(&self) -> Vec<ActiveEffect> {
        [self.active_good, self.active_bad]
            .into_iter()
            .filter(|effect| *effect != ActiveEffect::Null)
            .collect()
    }
}

/// Rolls effects for a natural artifact until their combined cost is at
/// most the current threshold.
///
/// The threshold starts at 1 on the first attempt and rises by 1 on each
/// rejection, so the loop ends once it passes the largest reachable cost.
pub fn pick_natural_effects<R: Rng + ?Sized>(
    property: NaturalProperty,
    layout: NaturalLayout,
    rng: &mut R,
) -> NaturalPicks {
    let data = property.data();
    let mut threshold = 0;
    let mut attempts = 0;

    loop {
        attempts += 1;

        let passive_good = if layout.good_passive() {
            pick_hinted(&data.passive_good, true, rng)
        } else {
            PassiveEffect::Null
        };
        let passive_bad = if layout.bad_passive() {
            pick_hinted(&data.passive_bad, false, rng)
        } else {
            PassiveEffect::Null
        };
        let active_good = if layout.good_active() {
            pick_hinted(&data.active_good, true, rng)
        } else {
            ActiveEffect::Null
        };
        let active_bad = if layout.bad_active() {
            pick_hinted(&data.active_bad, false, rng)
        } else {
            ActiveEffect::Null
        };

        let value = passive_good.cost() + passive_bad.cost() + active_good.cost() + active_bad.cost();
        threshold += 1;

        if value <= threshold {
            return NaturalPicks {
                passive_good,
                passive_bad,
                active_good,
                active_bad,
                value,
                attempts,
            };
        }
    }
}

/// One of the four hints, or with 1 in 4 odds (always, for an empty hint)
/// a uniform pick from the whole good or bad range.
fn pick_hinted<E: EffectFamily, R: Rng + ?Sized>(hints: &[E; 4], good: bool, rng: &mut R) -> E {
    let hint = rng.random_entry(hints).copied().unwrap_or(E::NULL);
    if hint != E::NULL && !rng.one_in(4) {
        return hint;
    }

    let range = if good { E::good_range() } else { E::bad_range() };
    if range.is_empty() {
        return E::NULL;
    }
    E::from_index(rng.gen_range(range)).unwrap_or(E::NULL)
}

/// Generates natural (found-object) artifacts.
///
/// Natural artifacts are always tools. With an active effect they always
/// get charges and a recharge mechanism; the recharge curse of forged tools
/// never applies to them.
pub struct NaturalArtifactGenerator<'a> {
    text: &'a dyn Localizer,
    property: Option<NaturalProperty>,
}

impl<'a> NaturalArtifactGenerator<'a> {
    /// Generator rolling a random property for each artifact.
    pub fn new(text: &'a dyn Localizer) -> Self {
        Self { text, property: None }
    }

    /// Generator producing artifacts of a fixed property.
    pub fn with_property(text: &'a dyn Localizer, property: NaturalProperty) -> Self {
        Self {
            text,
            property: Some(property),
        }
    }

    pub fn generate_tool(&self, rng: &mut StdRng) -> ArtificerResult<ToolArtifact> {
        let shape = *rng
            .random_entry(&NaturalShape::ALL)
            .ok_or_else(|| ArtificerError::GenerationFailed("no natural shapes".to_string()))?;
        let property = match self.property {
            Some(property) => property,
            None => *rng.random_entry(&NaturalProperty::ALL).ok_or_else(|| {
                ArtificerError::GenerationFailed("no natural properties".to_string())
            })?,
        };
        let shape_data = shape.data();
        let property_data = property.data();

        let mut common = ArtifactCommon::new(":", Color::Yellow);
        common.materials.push("stone".to_string());
        common.volume = Volume::from_ml(rng.rng(shape_data.volume_min.ml(), shape_data.volume_max.ml()));
        common.weight = Mass::from_grams(rng.rng(shape_data.weight_min.grams(), shape_data.weight_max.grams()));

        let text = self.text;
        common.name = text.format(
            &text.localize(PROPERTY_SHAPE),
            &[&text.localize(property_data.name), &text.localize(shape_data.name)],
        );
        common.description = text.format(
            &text.localize(NATURAL_DESCRIPTION),
            &[&text.localize(shape_data.desc), &text.localize(property_data.desc)],
        );

        let layout = NaturalLayout::roll(rng);
        let picks = pick_natural_effects(property, layout, rng);

        let mut tool = ToolArtifact::new(common);
        tool.effects_carried = picks.passive();
        tool.effects_activated = picks.active();

        if !tool.effects_activated.is_empty() {
            tool.max_charges = rng.rng(1, 4);
            tool.def_charges = tool.max_charges;
            tool.charge_type = *rng.random_entry(&ChargeType::RECHARGING).unwrap_or(&ChargeType::Time);
        }

        debug!(
            "Natural artifact `{}`: {:?}, value {} after {} attempts",
            tool.common.name, layout, picks.value, picks.attempts
        );

        Ok(tool)
    }
}

impl Generator<ArtifactRecord> for NaturalArtifactGenerator<'_> {
    fn generate(&self, rng: &mut StdRng) -> ArtificerResult<ArtifactRecord> {
        self.generate_tool(rng).map(ArtifactRecord::Tool)
    }

    fn validate(&self, content: &ArtifactRecord) -> ArtificerResult<()> {
        utils::validate_artifact(content)
    }

    fn generator_type(&self) -> &'static str {
        "NaturalArtifactGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnglishText;
    use rand::SeedableRng;

    #[test]
    fn test_layouts_fill_the_right_slots() {
        let mut rng = StdRng::seed_from_u64(8);
        for property in NaturalProperty::ALL {
            let picks = pick_natural_effects(property, NaturalLayout::PassivePair, &mut rng);
            assert!(picks.passive_good.is_good() && picks.passive_bad.is_bad());
            assert!(picks.active().is_empty());

            let picks = pick_natural_effects(property, NaturalLayout::ActivePair, &mut rng);
            assert!(picks.active_good.is_good() && picks.active_bad.is_bad());
            assert!(picks.passive().is_empty());

            let picks = pick_natural_effects(property, NaturalLayout::BadPassiveGoodActive, &mut rng);
            assert_eq!(picks.passive_good, PassiveEffect::Null);
            assert_eq!(picks.active_bad, ActiveEffect::Null);
            assert!(picks.passive_bad.is_bad() && picks.active_good.is_good());
        }
    }

    #[test]
    fn test_accepted_value_fits_final_threshold() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = NaturalLayout::roll(&mut rng);
            let property = NaturalProperty::ALL[(seed % 17) as usize];
            let picks = pick_natural_effects(property, layout, &mut rng);

            // The threshold equals the attempt count when the picks are accepted.
            assert!(picks.value <= picks.attempts as i32);
            // Worst case: a 50-cost clairvoyance plus the best active effect.
            assert!(picks.attempts <= 57, "seed {} took {} attempts", seed, picks.attempts);
        }
    }

    #[test]
    fn test_empty_hints_fall_back_to_whole_range() {
        let mut rng = StdRng::seed_from_u64(21);
        let hints = [PassiveEffect::Null; 4];
        for _ in 0..100 {
            assert!(pick_hinted(&hints, true, &mut rng).is_good());
            assert!(pick_hinted(&hints, false, &mut rng).is_bad());
        }
    }

    #[test]
    fn test_hints_are_preferred() {
        let mut rng = StdRng::seed_from_u64(13);
        let hints = [ActiveEffect::Light; 4];
        let hinted = (0..400)
            .filter(|_| pick_hinted(&hints, true, &mut rng) == ActiveEffect::Light)
            .count();
        // 3/4 straight from the hint, plus the odd uniform hit.
        assert!(hinted > 250, "hinted = {}", hinted);
    }

    #[test]
    fn test_natural_tool_shape() {
        let text = EnglishText;
        let generator = NaturalArtifactGenerator::with_property(&text, NaturalProperty::Glowing);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tool = generator.generate_tool(&mut rng).unwrap();

            assert!(tool.common.name.starts_with("glowing "));
            assert!(tool.common.description.ends_with(" glows faintly."));
            assert_eq!(tool.common.sym, ":");
            assert_eq!(tool.common.materials, vec!["stone".to_string()]);
            assert_eq!(tool.effects_carried.len() + tool.effects_activated.len(), 2);
            assert!(tool.effects_wielded.is_empty());

            if tool.effects_activated.is_empty() {
                assert_eq!(tool.max_charges, 0);
                assert_eq!(tool.charge_type, ChargeType::Null);
            } else {
                assert!((1..=4).contains(&tool.max_charges));
                assert_eq!(tool.def_charges, tool.max_charges);
                assert_ne!(tool.charge_type, ChargeType::Null);
            }

            generator.validate(&ArtifactRecord::Tool(tool)).unwrap();
        }
    }
}
