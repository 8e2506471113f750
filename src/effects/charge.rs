//! # Charge Types
//!
//! Recharge mechanisms for tool artifacts with active effects.

use serde::{Deserialize, Serialize};

/// Recharge mechanism identifier (ARTC).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChargeType {
    /// Does not recharge
    #[default]
    Null = 0,
    /// Regains charges as time passes
    Time,
    /// Regains charges in sunlight
    Solar,
    /// Drains the wielder's pain tolerance to recharge
    Pain,
    /// Drains the wielder's health to recharge
    Hp,
}

impl ChargeType {
    /// Every mechanism, indexed by discriminant.
    pub const ALL: [ChargeType; 5] = [
        ChargeType::Null,
        ChargeType::Time,
        ChargeType::Solar,
        ChargeType::Pain,
        ChargeType::Hp,
    ];

    /// Mechanisms an artifact can actually recharge with.
    pub const RECHARGING: [ChargeType; 4] = [
        ChargeType::Time,
        ChargeType::Solar,
        ChargeType::Pain,
        ChargeType::Hp,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ChargeType::Null => "ARTC_NULL",
            ChargeType::Time => "ARTC_TIME",
            ChargeType::Solar => "ARTC_SOLAR",
            ChargeType::Pain => "ARTC_PAIN",
            ChargeType::Hp => "ARTC_HP",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|charge| charge.name() == name)
    }
}
