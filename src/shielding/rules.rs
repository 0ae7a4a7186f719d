use super::constants::{ADJACENT_SHELL_SP, INNER, SAME_GROUP, SAME_GROUP_1S};
use crate::types::{ElectronConfiguration, OrbitalGroup, OrbitalType};
use serde::Serialize;

/// The branch of Slater's rules selected by the orbital type of the screened electron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShieldingRule {
    /// The screened electron is in an ns or np subshell.
    ///
    /// Other ns/np electrons screen with 0.35 (0.30 within 1s), s/p electrons of shell n - 1
    /// with 0.85, and everything deeper, including (n - 1)d/f, with 1.00.
    Penetrating { shell: u8 },
    /// The screened electron is in an nd or nf subshell.
    ///
    /// Other electrons of the same subshell screen with 0.35 and every group below it,
    /// including ns/np of the same shell, with 1.00.
    Inner { shell: u8, orbital: OrbitalType },
}

impl ShieldingRule {
    /// Selects the rule for an electron in `group`.
    pub fn for_group(group: &OrbitalGroup) -> Self {
        if group.orbital.is_penetrating() {
            ShieldingRule::Penetrating { shell: group.shell }
        } else {
            ShieldingRule::Inner {
                shell: group.shell,
                orbital: group.orbital,
            }
        }
    }

    /// Selects the rule for the outermost electron of `configuration`.
    pub fn for_configuration(configuration: &ElectronConfiguration) -> Self {
        Self::for_group(configuration.outer_group())
    }

    /// The principal quantum number of the screened electron.
    pub fn shell(&self) -> u8 {
        match *self {
            ShieldingRule::Penetrating { shell } | ShieldingRule::Inner { shell, .. } => shell,
        }
    }

    /// The coefficient applied to the same-group bucket.
    pub fn same_group_coefficient(&self) -> f64 {
        match *self {
            ShieldingRule::Penetrating { shell: 1 } => SAME_GROUP_1S,
            _ => SAME_GROUP,
        }
    }

    /// Sorts every electron of `configuration` except the screened one into buckets.
    ///
    /// `self` must be the rule selected for this same configuration.
    pub fn partition(&self, configuration: &ElectronConfiguration) -> ScreeningBuckets {
        let outer = configuration.outer_group();
        let mut buckets = ScreeningBuckets {
            same_group: outer.electrons.saturating_sub(1),
            ..ScreeningBuckets::default()
        };

        match *self {
            ShieldingRule::Penetrating { shell } => {
                for group in configuration.inner_groups() {
                    buckets.add_for_penetrating(shell, group);
                }
            }
            ShieldingRule::Inner { .. } => {
                buckets.deeper = configuration
                    .inner_groups()
                    .iter()
                    .map(|group| group.electrons)
                    .sum();
            }
        }

        buckets
    }
}

/// Electron counts per screening bucket, relative to the screened electron.
///
/// The four buckets are disjoint and together hold every electron except the screened one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScreeningBuckets {
    /// Other electrons of the screened electron's own group (0.35, or 0.30 within 1s).
    pub same_group: u32,
    /// s and p electrons of shell n - 1 (0.85).
    pub adjacent_sp: u32,
    /// d and f electrons of shell n - 1 (1.00).
    pub adjacent_df: u32,
    /// Everything else below the screened electron (1.00).
    pub deeper: u32,
}

impl ScreeningBuckets {
    fn add_for_penetrating(&mut self, outer_shell: u8, group: &OrbitalGroup) {
        // In shell order nothing above an ns/np outer group shares its shell except ns/np.
        if group.shell == outer_shell {
            self.same_group += group.electrons;
        } else if group.shell + 1 == outer_shell {
            if group.orbital.is_penetrating() {
                self.adjacent_sp += group.electrons;
            } else {
                self.adjacent_df += group.electrons;
            }
        } else {
            self.deeper += group.electrons;
        }
    }

    /// The number of screening electrons across all buckets.
    pub fn total_electrons(&self) -> u32 {
        self.same_group + self.adjacent_sp + self.adjacent_df + self.deeper
    }

    /// The screening constant S for these buckets.
    pub fn shielding(&self, same_group_coefficient: f64) -> f64 {
        self.same_group as f64 * same_group_coefficient
            + self.adjacent_sp as f64 * ADJACENT_SHELL_SP
            + self.adjacent_df as f64 * INNER
            + self.deeper as f64 * INNER
    }
}
