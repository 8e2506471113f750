//! # Budgeted Effect Selection
//!
//! Draws effects from a good and a bad pool, without replacement, until a
//! policy's stopping rule says the artifact has enough. The running sum of
//! effect costs (the "value") steers both when to stop and which pool to
//! draw from, which keeps total power inside a soft envelope.
//!
//! Every probabilistic decision goes through [`Dice`], so a seeded random
//! source reproduces the exact same sequence of picks.

use crate::config::{MAX_BAD_EFFECTS, MAX_GOOD_EFFECTS};
use crate::{Dice, EffectFamily};
use rand::Rng;

/// Counters accumulated while selecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Good effects picked so far
    pub good: u32,
    /// Bad effects picked so far
    pub bad: u32,
    /// Sum of the costs of everything picked
    pub value: i32,
}

impl SelectionState {
    pub fn total(&self) -> u32 {
        self.good + self.bad
    }
}

/// Result of one selection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<E> {
    /// Picked effects in draw order
    pub effects: Vec<E>,
    pub state: SelectionState,
}

/// Stopping rule and draw bias for one call site.
///
/// Hooks are evaluated in a fixed order before each draw: [`gate`], then the
/// pool and cap checks, then [`keep_going`]. After the pool is chosen with
/// [`draw_good`] and an effect is taken, [`on_accept`] runs.
///
/// [`gate`]: SelectionPolicy::gate
/// [`keep_going`]: SelectionPolicy::keep_going
/// [`draw_good`]: SelectionPolicy::draw_good
/// [`on_accept`]: SelectionPolicy::on_accept
pub trait SelectionPolicy {
    fn max_good(&self) -> u32 {
        MAX_GOOD_EFFECTS
    }

    fn max_bad(&self) -> u32 {
        MAX_BAD_EFFECTS
    }

    /// Checked before anything else on every iteration.
    fn gate<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> bool {
        true
    }

    /// Continuation predicate, evaluated once the caps allow another draw.
    fn keep_going<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool;

    /// Whether the next draw comes from the good pool.
    fn draw_good<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool;

    /// Called once per accepted effect.
    fn on_accept<R: Rng + ?Sized>(&mut self, _rng: &mut R) {}
}

/// Runs the selection loop over two pools.
///
/// Pools are consumed: each draw removes a uniformly chosen element, so no
/// effect is picked twice. The run ends as soon as either pool is empty. An
/// empty result is valid.
pub fn select_effects<E, P, R>(
    mut good: Vec<E>,
    mut bad: Vec<E>,
    policy: &mut P,
    rng: &mut R,
) -> Selection<E>
where
    E: EffectFamily,
    P: SelectionPolicy,
    R: Rng + ?Sized,
{
    let mut state = SelectionState::default();
    let mut effects = Vec::new();

    loop {
        if !policy.gate(rng) {
            break;
        }
        if good.is_empty() || bad.is_empty() {
            break;
        }
        if state.good >= policy.max_good() || state.bad >= policy.max_bad() {
            break;
        }
        if !policy.keep_going(&state, rng) {
            break;
        }

        let picked = if policy.draw_good(&state, rng) {
            rng.random_entry_removed(&mut good)
        } else {
            rng.random_entry_removed(&mut bad)
        };
        let Some(effect) = picked else {
            break;
        };

        if effect.is_good() {
            state.good += 1;
        } else {
            state.bad += 1;
        }
        state.value += effect.cost();
        effects.push(effect);
        policy.on_accept(rng);
    }

    Selection { effects, state }
}

fn odds(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Passive effects of a wielded tool.
///
/// Keeps drawing until there is at least one good and one bad effect, then
/// continues with shrinking odds, or unconditionally while the value is
/// above 1. Favors good effects while the value is below 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct WieldedPolicy;

impl SelectionPolicy for WieldedPolicy {
    fn keep_going<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool {
        state.good < 1
            || state.bad < 1
            || rng.one_in(odds(state.good + 1))
            || rng.one_in(odds(state.bad + 1))
            || state.value > 1
    }

    fn draw_good<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool {
        state.value < 1 && rng.one_in(2)
    }
}

/// Passive effects of a carried tool; more likely to be just bad.
///
/// Every iteration first passes a coin flip, so about half of all tools
/// carry nothing at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarriedPolicy;

impl SelectionPolicy for CarriedPolicy {
    fn gate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        rng.one_in(2)
    }

    fn keep_going<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool {
        (state.good > 2 && rng.one_in(odds(state.good + 1)))
            || state.bad < 1
            || rng.one_in(odds(state.bad + 1))
            || state.value > 1
    }

    fn draw_good<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool {
        state.value < 1 && rng.one_in(3)
    }
}

/// Passive effects of worn armor.
#[derive(Debug, Clone, Copy, Default)]
pub struct WornPolicy;

impl SelectionPolicy for WornPolicy {
    fn keep_going<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool {
        state.good < 1
            || rng.one_in(odds(state.good * 2))
            || state.value > 1
            || (state.bad < 3 && !rng.one_in(3 - odds(state.bad)))
    }

    fn draw_good<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool {
        state.value < 1 && rng.one_in(2)
    }
}

/// Active effects of a tool.
///
/// Not biased toward either side. Every accepted effect adds 1 to 3 charges,
/// collected in [`ActivatedPolicy::charges`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivatedPolicy {
    pub charges: i32,
}

impl SelectionPolicy for ActivatedPolicy {
    fn keep_going<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool {
        state.value > 3
            || (state.bad > 0 && state.good == 0)
            || !rng.one_in(3 - odds(state.good))
            || !rng.one_in(3 - odds(state.bad))
    }

    fn draw_good<R: Rng + ?Sized>(&mut self, state: &SelectionState, rng: &mut R) -> bool {
        !rng.one_in(3) && state.value <= 1
    }

    fn on_accept<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.charges += rng.rng(1, 3);
    }
}
