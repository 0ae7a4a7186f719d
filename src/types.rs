//! This module defines the core types used in the slater library for representing electron
//! configurations and screening results.
//!
//! It includes the `ConfigurationProvider` trait for abstracting the source of configuration data,
//! the validated `ElectronConfiguration` with its `OrbitalGroup` entries, and the `ShieldingResult`
//! struct carrying the outcome of a Slater screening calculation. An `ElectronConfiguration` can
//! only be obtained through validation, so downstream code may rely on its ordering.

use crate::error::{ConfigurationError, SlaterError};
use crate::shielding::{ScreeningBuckets, ShieldingRule};
use serde::Serialize;
use std::fmt;

/// A trait for any source of ground-state electron configurations.
///
/// The screening calculation never fetches data on its own; it asks a provider for the
/// configuration belonging to an atomic number. The built-in [`ConfigurationTable`] is one
/// implementation, but callers can adapt their own periodic-table data by implementing this
/// trait.
///
/// [`ConfigurationTable`]: crate::data::ConfigurationTable
pub trait ConfigurationProvider {
    /// Returns the electron configuration of the neutral atom with the given atomic number.
    ///
    /// # Errors
    ///
    /// Implementations return `SlaterError::ConfigurationNotFound` when the element is unknown
    /// to them.
    fn configuration(&self, atomic_number: u8) -> Result<ElectronConfiguration, SlaterError>;
}

/// The angular-momentum type of a subshell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitalType {
    S,
    P,
    D,
    F,
}

impl OrbitalType {
    /// The azimuthal quantum number l.
    #[inline]
    pub fn azimuthal(self) -> u8 {
        match self {
            OrbitalType::S => 0,
            OrbitalType::P => 1,
            OrbitalType::D => 2,
            OrbitalType::F => 3,
        }
    }

    /// The maximum number of electrons a subshell of this type can hold, 2(2l + 1).
    #[inline]
    pub fn capacity(self) -> u32 {
        2 * (2 * self.azimuthal() as u32 + 1)
    }

    /// Whether this is an s or p subshell.
    ///
    /// Slater groups ns and np electrons together; d and f subshells each form a group of
    /// their own.
    #[inline]
    pub fn is_penetrating(self) -> bool {
        matches!(self, OrbitalType::S | OrbitalType::P)
    }

    pub fn symbol(self) -> char {
        match self {
            OrbitalType::S => 's',
            OrbitalType::P => 'p',
            OrbitalType::D => 'd',
            OrbitalType::F => 'f',
        }
    }

    /// Parses a spectroscopic orbital letter, ignoring case.
    pub fn from_symbol(symbol: char) -> Result<Self, ConfigurationError> {
        match symbol.to_ascii_lowercase() {
            's' => Ok(OrbitalType::S),
            'p' => Ok(OrbitalType::P),
            'd' => Ok(OrbitalType::D),
            'f' => Ok(OrbitalType::F),
            _ => Err(ConfigurationError::UnknownOrbital(symbol)),
        }
    }
}

impl fmt::Display for OrbitalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// All electrons sharing one principal quantum number and one orbital type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OrbitalGroup {
    /// The principal quantum number n.
    pub shell: u8,
    /// The subshell type.
    pub orbital: OrbitalType,
    /// The number of electrons occupying the subshell.
    pub electrons: u32,
}

impl OrbitalGroup {
    pub fn new(shell: u8, orbital: OrbitalType, electrons: u32) -> Self {
        Self {
            shell,
            orbital,
            electrons,
        }
    }

    /// The (n, l) pair used to order groups within a configuration.
    #[inline]
    pub fn sort_key(&self) -> (u8, u8) {
        (self.shell, self.orbital.azimuthal())
    }
}

impl fmt::Display for OrbitalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.shell, self.orbital, self.electrons)
    }
}

/// A validated electron configuration ordered by shell, then subshell.
///
/// The last group is the outermost one by construction: construction fails unless groups are
/// strictly increasing in (n, l), every subshell exists in its shell, no subshell exceeds its
/// capacity, and the outermost subshell holds at least one electron.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElectronConfiguration {
    groups: Vec<OrbitalGroup>,
}

impl ElectronConfiguration {
    /// Validates `groups` and wraps them into a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ConfigurationError`] rule: `Empty`, `NonexistentSubshell`,
    /// `CapacityExceeded`, `Misordered` or `EmptyOuterGroup`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slater::{ElectronConfiguration, OrbitalGroup, OrbitalType};
    ///
    /// let nitrogen = ElectronConfiguration::new(vec![
    ///     OrbitalGroup::new(1, OrbitalType::S, 2),
    ///     OrbitalGroup::new(2, OrbitalType::S, 2),
    ///     OrbitalGroup::new(2, OrbitalType::P, 3),
    /// ])
    /// .unwrap();
    /// assert_eq!(nitrogen.total_electrons(), 7);
    /// assert_eq!(nitrogen.to_string(), "1s2 2s2 2p3");
    /// ```
    pub fn new(groups: Vec<OrbitalGroup>) -> Result<Self, ConfigurationError> {
        if groups.is_empty() {
            return Err(ConfigurationError::Empty);
        }

        let mut previous: Option<&OrbitalGroup> = None;
        for group in &groups {
            if group.shell == 0 || group.orbital.azimuthal() >= group.shell {
                return Err(ConfigurationError::NonexistentSubshell {
                    shell: group.shell,
                    orbital: group.orbital,
                });
            }

            let capacity = group.orbital.capacity();
            if group.electrons > capacity {
                return Err(ConfigurationError::CapacityExceeded {
                    shell: group.shell,
                    orbital: group.orbital,
                    electrons: group.electrons,
                    capacity,
                });
            }

            if let Some(prev) = previous {
                if group.sort_key() <= prev.sort_key() {
                    return Err(ConfigurationError::Misordered {
                        shell: group.shell,
                        orbital: group.orbital,
                        previous_shell: prev.shell,
                        previous_orbital: prev.orbital,
                    });
                }
            }
            previous = Some(group);
        }

        if let Some(outer) = groups.last() {
            if outer.electrons == 0 {
                return Err(ConfigurationError::EmptyOuterGroup {
                    shell: outer.shell,
                    orbital: outer.orbital,
                });
            }
        }

        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[OrbitalGroup] {
        &self.groups
    }

    /// The group containing the electron being screened.
    pub fn outer_group(&self) -> &OrbitalGroup {
        // Non-empty by construction.
        &self.groups[self.groups.len() - 1]
    }

    /// The groups other than the outermost one.
    pub fn inner_groups(&self) -> &[OrbitalGroup] {
        &self.groups[..self.groups.len() - 1]
    }

    pub fn total_electrons(&self) -> u32 {
        self.groups.iter().map(|group| group.electrons).sum()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Always `false`; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrbitalGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a ElectronConfiguration {
    type Item = &'a OrbitalGroup;
    type IntoIter = std::slice::Iter<'a, OrbitalGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl fmt::Display for ElectronConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}

impl Serialize for ElectronConfiguration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The result of a Slater screening calculation for the outermost electron.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShieldingResult {
    /// The atomic number Z the calculation was performed for.
    pub atomic_number: u8,
    /// The outermost orbital group, which contains the screened electron.
    pub outer_group: OrbitalGroup,
    /// The rule branch selected from the outer orbital type.
    pub rule: ShieldingRule,
    /// Electron counts per screening bucket.
    pub buckets: ScreeningBuckets,
    /// The total screening constant S.
    pub shielding: f64,
    /// The effective nuclear charge Z - S.
    pub effective_charge: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(shell: u8, orbital: OrbitalType, electrons: u32) -> OrbitalGroup {
        OrbitalGroup::new(shell, orbital, electrons)
    }

    #[test]
    fn test_orbital_type_capacities() {
        assert_eq!(OrbitalType::S.capacity(), 2);
        assert_eq!(OrbitalType::P.capacity(), 6);
        assert_eq!(OrbitalType::D.capacity(), 10);
        assert_eq!(OrbitalType::F.capacity(), 14);
    }

    #[test]
    fn test_orbital_type_from_symbol() {
        assert_eq!(OrbitalType::from_symbol('s'), Ok(OrbitalType::S));
        assert_eq!(OrbitalType::from_symbol('D'), Ok(OrbitalType::D));
        assert_eq!(
            OrbitalType::from_symbol('g'),
            Err(ConfigurationError::UnknownOrbital('g'))
        );
    }

    #[test]
    fn test_new_accepts_iron_and_exposes_outer_group() {
        let iron = ElectronConfiguration::new(vec![
            group(1, OrbitalType::S, 2),
            group(2, OrbitalType::S, 2),
            group(2, OrbitalType::P, 6),
            group(3, OrbitalType::S, 2),
            group(3, OrbitalType::P, 6),
            group(3, OrbitalType::D, 6),
            group(4, OrbitalType::S, 2),
        ])
        .unwrap();

        assert_eq!(iron.total_electrons(), 26);
        assert_eq!(iron.len(), 7);
        assert_eq!(*iron.outer_group(), group(4, OrbitalType::S, 2));
        assert_eq!(iron.inner_groups().len(), 6);
        assert_eq!(iron.to_string(), "1s2 2s2 2p6 3s2 3p6 3d6 4s2");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            ElectronConfiguration::new(vec![]),
            Err(ConfigurationError::Empty)
        );
    }

    #[test]
    fn test_new_rejects_nonexistent_subshell() {
        let result = ElectronConfiguration::new(vec![group(1, OrbitalType::S, 2), group(1, OrbitalType::P, 1)]);
        assert_eq!(
            result,
            Err(ConfigurationError::NonexistentSubshell {
                shell: 1,
                orbital: OrbitalType::P
            })
        );

        let result = ElectronConfiguration::new(vec![group(0, OrbitalType::S, 1)]);
        assert!(matches!(
            result,
            Err(ConfigurationError::NonexistentSubshell { shell: 0, .. })
        ));
    }

    #[test]
    fn test_new_rejects_overfilled_subshell() {
        let result = ElectronConfiguration::new(vec![group(1, OrbitalType::S, 3)]);
        assert_eq!(
            result,
            Err(ConfigurationError::CapacityExceeded {
                shell: 1,
                orbital: OrbitalType::S,
                electrons: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_new_rejects_filling_order() {
        let result = ElectronConfiguration::new(vec![
            group(1, OrbitalType::S, 2),
            group(2, OrbitalType::S, 2),
            group(2, OrbitalType::P, 6),
            group(3, OrbitalType::S, 2),
            group(3, OrbitalType::P, 6),
            group(4, OrbitalType::S, 2),
            group(3, OrbitalType::D, 6),
        ]);
        assert_eq!(
            result,
            Err(ConfigurationError::Misordered {
                shell: 3,
                orbital: OrbitalType::D,
                previous_shell: 4,
                previous_orbital: OrbitalType::S
            })
        );
    }

    #[test]
    fn test_new_rejects_duplicate_group() {
        let result = ElectronConfiguration::new(vec![group(1, OrbitalType::S, 1), group(1, OrbitalType::S, 1)]);
        assert!(matches!(result, Err(ConfigurationError::Misordered { .. })));
    }

    #[test]
    fn test_new_rejects_empty_outer_group() {
        let result = ElectronConfiguration::new(vec![group(1, OrbitalType::S, 2), group(2, OrbitalType::S, 0)]);
        assert_eq!(
            result,
            Err(ConfigurationError::EmptyOuterGroup {
                shell: 2,
                orbital: OrbitalType::S
            })
        );
    }

    #[test]
    fn test_inner_empty_groups_are_allowed() {
        let config =
            ElectronConfiguration::new(vec![group(1, OrbitalType::S, 2), group(2, OrbitalType::S, 0), group(2, OrbitalType::P, 1)])
                .unwrap();
        assert_eq!(config.total_electrons(), 3);
    }
}
