//! This module provides electron-configuration tables and utilities for loading them from TOML files.
//!
//! It defines the `ConfigurationTable` struct, the crate's implementation of the
//! `ConfigurationProvider` trait. Tables are keyed by atomic number; TOML files may use either
//! atomic numbers or element symbols as keys, and every entry is parsed from conventional notation
//! and checked against its atomic number while loading.

use crate::elements::element_symbol_to_atomic_number;
use crate::error::{ConfigurationError, SlaterError};
use crate::notation::parse_configuration;
use crate::types::{ConfigurationProvider, ElectronConfiguration};
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::path::Path;

/// A collection of neutral-atom electron configurations indexed by atomic number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigurationTable {
    /// A mapping from atomic number to the validated configuration of that element.
    ///
    /// Every stored configuration holds exactly as many electrons as its key.
    #[serde(deserialize_with = "deserialize_configuration_map")]
    pub configurations: HashMap<u8, ElectronConfiguration>,
}

impl ConfigurationTable {
    /// Loads configurations from a TOML file.
    ///
    /// The file should contain a `[configurations]` table whose keys are atomic numbers or
    /// element symbols and whose values are notation strings.
    ///
    /// # Errors
    ///
    /// Returns a `SlaterError::IoError` if the file cannot be read, or a
    /// `SlaterError::DeserializationError` if the TOML content is invalid, contains unrecognized
    /// element keys, or holds a configuration whose electron count differs from its key.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use slater::ConfigurationTable;
    /// use std::path::Path;
    ///
    /// let table = ConfigurationTable::load_from_file(Path::new("configurations.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, SlaterError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| SlaterError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses configurations from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `SlaterError::DeserializationError` if the TOML content is invalid, contains
    /// unrecognized element keys, or holds an invalid configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use slater::ConfigurationTable;
    ///
    /// let toml_data = r#"
    /// [configurations]
    /// "1" = "1s1"
    /// Fe = "[Ar] 3d6 4s2"
    /// "#;
    ///
    /// let table = ConfigurationTable::load_from_str(toml_data).unwrap();
    /// assert_eq!(table.configurations.len(), 2);
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, SlaterError> {
        toml::from_str(toml_str).map_err(SlaterError::from)
    }

    /// Creates a new empty `ConfigurationTable`.
    pub fn new() -> Self {
        ConfigurationTable {
            configurations: HashMap::new(),
        }
    }

    /// Adds or replaces the configuration for `atomic_number`.
    ///
    /// Returns the previously stored configuration, if any.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::ElectronCountMismatch` when the configuration does not hold
    /// exactly `atomic_number` electrons.
    pub fn insert(
        &mut self,
        atomic_number: u8,
        configuration: ElectronConfiguration,
    ) -> Result<Option<ElectronConfiguration>, SlaterError> {
        check_electron_count(atomic_number, &configuration)?;
        Ok(self.configurations.insert(atomic_number, configuration))
    }

    /// All atomic numbers present in the table, in ascending order.
    pub fn atomic_numbers(&self) -> Vec<u8> {
        let mut numbers: Vec<u8> = self.configurations.keys().copied().collect();
        numbers.sort_unstable();
        numbers
    }
}

impl Default for ConfigurationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationProvider for ConfigurationTable {
    fn configuration(&self, atomic_number: u8) -> Result<ElectronConfiguration, SlaterError> {
        self.configurations
            .get(&atomic_number)
            .cloned()
            .ok_or(SlaterError::ConfigurationNotFound(atomic_number))
    }
}

pub(crate) fn check_electron_count(
    atomic_number: u8,
    configuration: &ElectronConfiguration,
) -> Result<(), ConfigurationError> {
    let found = configuration.total_electrons();
    if found != atomic_number as u32 {
        return Err(ConfigurationError::ElectronCountMismatch {
            expected: atomic_number as u32,
            found,
        });
    }
    Ok(())
}

/// Deserializes a map of configuration notations with flexible key types.
///
/// Keys can be atomic numbers (as strings) or element symbols; values are parsed with
/// [`parse_configuration`] and must hold as many electrons as the key's atomic number.
fn deserialize_configuration_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<u8, ElectronConfiguration>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ConfigurationMapVisitor;

    impl<'de> Visitor<'de> for ConfigurationMapVisitor {
        type Value = HashMap<u8, ElectronConfiguration>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map from atomic number or symbol to configuration notation")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut configurations = HashMap::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, notation)) = map.next_entry::<String, String>()? {
                let atomic_number = key.parse::<u8>().or_else(|_| {
                    element_symbol_to_atomic_number(&key)
                        .ok_or_else(|| de::Error::custom(format!("invalid element key: '{}'", key)))
                })?;

                let configuration = parse_configuration(&notation)
                    .and_then(|configuration| {
                        check_electron_count(atomic_number, &configuration)?;
                        Ok(configuration)
                    })
                    .map_err(|error| {
                        de::Error::custom(format!(
                            "invalid configuration for '{}' (\"{}\"): {}",
                            key, notation, error
                        ))
                    })?;

                match configurations.entry(atomic_number) {
                    Entry::Occupied(_) => {
                        return Err(de::Error::custom(format!(
                            "duplicate entry for atomic number {} (key '{}')",
                            atomic_number, key
                        )));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(configuration);
                    }
                }
            }
            Ok(configurations)
        }
    }

    deserializer.deserialize_map(ConfigurationMapVisitor)
}
