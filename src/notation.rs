//! Parsing of conventional electron-configuration notation.
//!
//! Accepts strings such as `"1s2 2s2 2p3"`, `"[Ar] 3d6 4s2"` or `"[Ar] 4s2 3d6"`. Written
//! notation mixes filling order and shell order, so the parsed groups are always sorted into
//! shell order before validation; the resulting [`ElectronConfiguration`] is therefore the same
//! for both spellings.

use crate::error::ConfigurationError;
use crate::types::{ElectronConfiguration, OrbitalGroup, OrbitalType};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Parses an electron configuration written in conventional notation.
///
/// Tokens are separated by whitespace. Each token is either a noble-gas core in brackets
/// (`[He]` through `[Rn]`) or a subshell `<n><l><count>`; the count defaults to one when
/// omitted.
///
/// # Errors
///
/// Returns `ConfigurationError::MalformedToken` for unparsable tokens or unknown cores,
/// `UnknownOrbital` for letters other than s/p/d/f, `DuplicateGroup` when a subshell appears
/// twice, and any error raised by [`ElectronConfiguration::new`].
///
/// # Examples
///
/// ```
/// use slater::notation::parse_configuration;
///
/// let lead = parse_configuration("[Xe] 4f14 5d10 6s2 6p2").unwrap();
/// assert_eq!(lead.total_electrons(), 82);
/// assert_eq!(lead.outer_group().to_string(), "6p2");
/// ```
pub fn parse_configuration(notation: &str) -> Result<ElectronConfiguration, ConfigurationError> {
    let mut groups = BTreeMap::new();
    collect_groups(notation, &mut groups)?;
    ElectronConfiguration::new(groups.into_values().collect())
}

impl FromStr for ElectronConfiguration {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_configuration(s)
    }
}

fn collect_groups(
    notation: &str,
    groups: &mut BTreeMap<(u8, u8), OrbitalGroup>,
) -> Result<(), ConfigurationError> {
    for token in notation.split_whitespace() {
        if let Some(core) = token.strip_prefix('[') {
            let core = core
                .strip_suffix(']')
                .ok_or_else(|| ConfigurationError::MalformedToken(token.to_string()))?;
            let core_notation = noble_gas_core(core)
                .ok_or_else(|| ConfigurationError::MalformedToken(token.to_string()))?;
            collect_groups(core_notation, groups)?;
        } else {
            let group = parse_group(token)?;
            if groups.insert(group.sort_key(), group).is_some() {
                return Err(ConfigurationError::DuplicateGroup {
                    shell: group.shell,
                    orbital: group.orbital,
                });
            }
        }
    }
    Ok(())
}

fn parse_group(token: &str) -> Result<OrbitalGroup, ConfigurationError> {
    let malformed = || ConfigurationError::MalformedToken(token.to_string());

    let letter_index = token
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(malformed)?;
    let (shell, rest) = token.split_at(letter_index);
    let shell: u8 = shell.parse().map_err(|_| malformed())?;

    let mut chars = rest.chars();
    let letter = chars.next().ok_or_else(malformed)?;
    if !letter.is_ascii_alphabetic() {
        return Err(malformed());
    }
    let orbital = OrbitalType::from_symbol(letter)?;

    let count = chars.as_str();
    let electrons = if count.is_empty() {
        1
    } else {
        count.parse::<u32>().map_err(|_| malformed())?
    };

    Ok(OrbitalGroup::new(shell, orbital, electrons))
}

fn noble_gas_core(symbol: &str) -> Option<&'static str> {
    const CORES: [(&str, &str); 6] = [
        ("He", "1s2"),
        ("Ne", "[He] 2s2 2p6"),
        ("Ar", "[Ne] 3s2 3p6"),
        ("Kr", "[Ar] 3d10 4s2 4p6"),
        ("Xe", "[Kr] 4d10 5s2 5p6"),
        ("Rn", "[Xe] 4f14 5d10 6s2 6p6"),
    ];
    CORES
        .iter()
        .find(|(core, _)| core.eq_ignore_ascii_case(symbol))
        .map(|(_, notation)| *notation)
}
