//! This module implements Slater's screening rules for the outermost electron.
//!
//! It contains the empirical screening coefficients and the rule dispatch that sorts every other
//! electron of a configuration into the bucket that determines how strongly it screens.

/// Slater's empirical screening coefficients.
pub mod constants;

/// Rule selection from the outer orbital type and partitioning into screening buckets.
pub mod rules;

pub use rules::{ScreeningBuckets, ShieldingRule};
