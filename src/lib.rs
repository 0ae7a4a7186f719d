//! Effective nuclear charge of the outermost electron from Slater's screening rules.
//!
//! Given a validated [`ElectronConfiguration`], the crate sorts every electron other than the
//! screened one into Slater's screening groups, sums their weighted contributions into the
//! screening constant S and returns Z_eff = Z - S. Configurations can be built directly, parsed
//! from conventional notation, or looked up through a [`ConfigurationProvider`] such as the
//! embedded [`ConfigurationTable`].
//!
//! ```
//! use slater::{ShieldingCalculator, get_default_configurations};
//!
//! let calculator = ShieldingCalculator::new(get_default_configurations());
//! let lead = calculator.calculate(82).unwrap();
//! assert!((lead.effective_charge - 4.15).abs() < 1e-9);
//! ```

pub mod calculator;
pub mod data;
pub mod elements;
pub mod error;
pub mod notation;
pub mod shielding;
pub mod types;

pub use calculator::{ShieldingCalculator, compute_effective_nuclear_charge, compute_shielding};
pub use data::ConfigurationTable;
pub use error::{ConfigurationError, SlaterError};
pub use shielding::{ScreeningBuckets, ShieldingRule};
pub use types::{
    ConfigurationProvider, ElectronConfiguration, OrbitalGroup, OrbitalType, ShieldingResult,
};

use std::sync::OnceLock;

static DEFAULT_CONFIGURATIONS: OnceLock<ConfigurationTable> = OnceLock::new();

/// Returns the embedded table of neutral ground-state configurations, hydrogen through
/// oganesson.
pub fn get_default_configurations() -> &'static ConfigurationTable {
    DEFAULT_CONFIGURATIONS.get_or_init(|| {
        const DEFAULT_CONFIGURATIONS_TOML: &str = include_str!("../resources/configurations.toml");
        ConfigurationTable::load_from_str(DEFAULT_CONFIGURATIONS_TOML)
            .expect("Failed to parse embedded default configurations. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_configurations() {
        let table1 = get_default_configurations();
        assert_eq!(table1.configurations.len(), 118);
        assert_eq!(
            table1.configuration(26).unwrap().to_string(),
            "1s2 2s2 2p6 3s2 3p6 3d6 4s2"
        );

        let table2 = get_default_configurations();
        assert_eq!(
            table1 as *const _, table2 as *const _,
            "Subsequent calls should return a cached reference"
        );
    }

    #[test]
    fn test_default_configurations_match_their_atomic_numbers() {
        let table = get_default_configurations();
        for z in 1..=elements::MAX_ATOMIC_NUMBER {
            let configuration = table.configuration(z).unwrap();
            assert_eq!(configuration.total_electrons(), z as u32);
        }
    }
}
