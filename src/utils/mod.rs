//! # Utilities Module
//!
//! Random-source helpers, text localization and physical units shared by the
//! generators and the persistence codec.

pub mod rng;
pub mod text;
pub mod units;

pub use rng::*;
pub use text::*;
pub use units::*;
