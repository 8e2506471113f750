//! # Dice
//!
//! The three random primitives every generator is written against, provided
//! as an extension trait over any [`rand::Rng`].

use rand::Rng;

/// Random primitives used by artifact generation.
///
/// Implemented for every [`Rng`], so a seeded [`rand::rngs::StdRng`] makes
/// every decision reproducible.
pub trait Dice {
    /// Uniform integer in `min..=max`. Reversed bounds are swapped.
    fn rng(&mut self, min: i32, max: i32) -> i32;

    /// True with probability `1/n`. Always true for `n <= 1`.
    fn one_in(&mut self, n: i32) -> bool;

    /// Uniformly chosen element, or `None` for an empty slice.
    fn random_entry<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;

    /// Removes and returns a uniformly chosen element.
    ///
    /// The chosen element is swapped with the last one before popping, so
    /// every remaining element is equally likely on each call.
    fn random_entry_removed<T>(&mut self, items: &mut Vec<T>) -> Option<T>;
}

impl<R: Rng + ?Sized> Dice for R {
    fn rng(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.gen_range(lo..=hi)
    }

    fn one_in(&mut self, n: i32) -> bool {
        n <= 1 || self.gen_range(0..n) == 0
    }

    fn random_entry<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.gen_range(0..items.len()))
    }

    fn random_entry_removed<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.gen_range(0..items.len());
        Some(items.swap_remove(index))
    }
}
