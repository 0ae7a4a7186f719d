//! Screening coefficients from Slater's rules (J. C. Slater, Phys. Rev. 36, 57 (1930)).

/// Screening by each other electron of the same group.
pub const SAME_GROUP: f64 = 0.35;

/// Screening by the other electron of a 1s outer group.
///
/// Replaces [`SAME_GROUP`] only when the screened electron itself is in 1s.
pub const SAME_GROUP_1S: f64 = 0.30;

/// Screening of an ns/np electron by each s or p electron of shell n - 1.
pub const ADJACENT_SHELL_SP: f64 = 0.85;

/// Screening by electrons that are fully inside the screened electron: shells n - 2 and below,
/// d/f electrons of shell n - 1, and every group below an nd/nf outer group.
pub const INNER: f64 = 1.00;
