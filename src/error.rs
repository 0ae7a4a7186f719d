use crate::types::OrbitalType;
use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `slater` library.
///
/// Every failure is surfaced to the caller as-is; nothing is retried or silently
/// corrected, since the screening computation itself is pure and deterministic.
#[derive(Error, Debug)]
pub enum SlaterError {
    /// The electron configuration is malformed or inconsistent with the atomic number.
    ///
    /// The wrapped [`ConfigurationError`] names the exact rule that was violated.
    #[error("Invalid electron configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    /// No configuration is known for the requested atomic number in the
    /// configuration table being queried.
    #[error("Electron configuration not found for element with atomic number: {0}")]
    ConfigurationNotFound(u8),

    /// An I/O error that occurred while attempting to read a configuration file.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An error that occurred while parsing a configuration file, either invalid
    /// TOML or an entry whose notation or electron count is wrong.
    #[error("Failed to deserialize TOML configurations: {0}")]
    DeserializationError(#[from] toml::de::Error),
}

/// The specific way in which an electron configuration is invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The configuration contains no orbital groups at all.
    #[error("configuration contains no orbital groups")]
    Empty,

    /// A subshell that cannot exist in the given shell, such as `1p` or `2d`.
    #[error("subshell {shell}{orbital} does not exist (requires l < n)")]
    NonexistentSubshell { shell: u8, orbital: OrbitalType },

    /// More electrons in a subshell than it can hold.
    #[error("subshell {shell}{orbital} holds {electrons} electrons but its capacity is {capacity}")]
    CapacityExceeded {
        shell: u8,
        orbital: OrbitalType,
        electrons: u32,
        capacity: u32,
    },

    /// Groups are not in strictly increasing shell/subshell order, so the last
    /// group cannot be trusted to be the outermost one.
    #[error("subshell {shell}{orbital} is listed after {previous_shell}{previous_orbital}")]
    Misordered {
        shell: u8,
        orbital: OrbitalType,
        previous_shell: u8,
        previous_orbital: OrbitalType,
    },

    /// The outermost group holds no electron to be screened.
    #[error("outermost subshell {shell}{orbital} holds no electrons")]
    EmptyOuterGroup { shell: u8, orbital: OrbitalType },

    /// The number of electrons does not match the atomic number.
    #[error("expected {expected} electrons for Z = {expected}, found {found}")]
    ElectronCountMismatch { expected: u32, found: u32 },

    /// An orbital letter outside of `s`, `p`, `d` and `f`.
    #[error("unknown orbital type '{0}'")]
    UnknownOrbital(char),

    /// A notation token that is neither a noble-gas core nor `<n><l><count>`.
    #[error("malformed configuration token '{0}'")]
    MalformedToken(String),

    /// The same subshell appears twice in a notation string.
    #[error("subshell {shell}{orbital} is specified more than once")]
    DuplicateGroup { shell: u8, orbital: OrbitalType },
}
