//! This module contains the calculator components for computing effective nuclear charges.
//!
//! It exposes the pure functions that apply Slater's rules to a single configuration and the
//! `ShieldingCalculator`, which pairs them with a `ConfigurationProvider` for element lookups and
//! batch evaluation.

mod effective_charge;
mod implementation;

pub use effective_charge::{compute_effective_nuclear_charge, compute_shielding};
pub use implementation::ShieldingCalculator;
