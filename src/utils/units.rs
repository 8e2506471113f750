//! # Units
//!
//! Volume and mass newtypes so millilitres and grams never mix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A volume in millilitres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volume(i32);

impl Volume {
    pub const ZERO: Volume = Volume(0);

    pub const fn from_ml(ml: i32) -> Self {
        Self(ml)
    }

    pub const fn ml(self) -> i32 {
        self.0
    }
}

impl Add for Volume {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Volume {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ml", self.0)
    }
}

/// A mass in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mass(i32);

impl Mass {
    pub const ZERO: Mass = Mass(0);

    pub const fn from_grams(grams: i32) -> Self {
        Self(grams)
    }

    pub const fn grams(self) -> i32 {
        self.0
    }
}

impl Add for Mass {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Mass {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} g", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_arithmetic() {
        let mut volume = Volume::from_ml(1500);
        volume += Volume::from_ml(-1000);
        assert_eq!(volume, Volume::from_ml(500));
        assert_eq!(Mass::from_grams(4) + Mass::from_grams(1), Mass::from_grams(5));
    }

    #[test]
    fn test_units_serialize_as_plain_integers() {
        assert_eq!(serde_json::to_string(&Volume::from_ml(250)).unwrap(), "250");
        let mass: Mass = serde_json::from_str("700").unwrap();
        assert_eq!(mass.grams(), 700);
    }
}
