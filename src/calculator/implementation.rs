//! This module implements the `ShieldingCalculator`, which evaluates Slater's rules for elements
//! looked up through a `ConfigurationProvider`.
//!
//! The calculator holds no state besides a reference to its provider, so one instance can be
//! shared freely between threads; batch evaluation fans out over rayon's thread pool.

use super::effective_charge::compute_shielding;
use crate::data::ConfigurationTable;
use crate::error::SlaterError;
use crate::types::{ConfigurationProvider, ShieldingResult};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// Computes Slater screening results for elements supplied by a configuration provider.
pub struct ShieldingCalculator<'p, P: ConfigurationProvider + ?Sized = ConfigurationTable> {
    /// The source of electron configurations.
    provider: &'p P,
}

impl<'p, P: ConfigurationProvider + ?Sized> ShieldingCalculator<'p, P> {
    /// Creates a calculator backed by `provider`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slater::{ShieldingCalculator, get_default_configurations};
    ///
    /// let calculator = ShieldingCalculator::new(get_default_configurations());
    /// let iron = calculator.calculate(26).unwrap();
    /// assert!((iron.effective_charge - 2.85).abs() < 1e-9);
    /// ```
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Fetches the configuration for `atomic_number` and applies Slater's rules to it.
    ///
    /// # Errors
    ///
    /// Propagates provider errors (such as `SlaterError::ConfigurationNotFound`) and any
    /// `SlaterError::InvalidConfiguration` raised by the computation.
    pub fn calculate(&self, atomic_number: u8) -> Result<ShieldingResult, SlaterError> {
        let configuration = self.provider.configuration(atomic_number)?;
        compute_shielding(atomic_number, &configuration)
    }

    /// Like [`calculate`](Self::calculate), returning only Z_eff.
    pub fn effective_nuclear_charge(&self, atomic_number: u8) -> Result<f64, SlaterError> {
        self.calculate(atomic_number)
            .map(|result| result.effective_charge)
    }
}

impl<'p, P: ConfigurationProvider + Sync + ?Sized> ShieldingCalculator<'p, P> {
    /// Calculates every element in `atomic_numbers` in parallel.
    ///
    /// Results are returned in input order.
    ///
    /// # Errors
    ///
    /// Any failing element aborts the batch and its error is returned.
    #[instrument(skip_all, name = "shielding_batch", fields(elements = atomic_numbers.len()))]
    pub fn calculate_many(
        &self,
        atomic_numbers: &[u8],
    ) -> Result<Vec<ShieldingResult>, SlaterError> {
        let results = atomic_numbers
            .par_iter()
            .map(|&atomic_number| self.calculate(atomic_number))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = results.len(), "Batch screening calculation complete.");
        Ok(results)
    }

    /// Calculates every element whose atomic number lies in `range`.
    pub fn calculate_range(
        &self,
        range: RangeInclusive<u8>,
    ) -> Result<Vec<ShieldingResult>, SlaterError> {
        let atomic_numbers: Vec<u8> = range.collect();
        self.calculate_many(&atomic_numbers)
    }
}
