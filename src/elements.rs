//! Element symbols and their atomic numbers, hydrogen (1) through oganesson (118).

const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// The highest atomic number with a known symbol.
pub const MAX_ATOMIC_NUMBER: u8 = SYMBOLS.len() as u8;

/// Converts an element symbol to its atomic number.
///
/// Matching is case-sensitive (`"Co"` is cobalt, `"CO"` is not an element).
pub fn element_symbol_to_atomic_number(symbol: &str) -> Option<u8> {
    SYMBOLS
        .iter()
        .position(|&candidate| candidate == symbol)
        .map(|index| index as u8 + 1)
}

/// Converts an element symbol to its atomic number, ignoring case.
pub fn element_symbol_to_atomic_number_ignore_case(symbol: &str) -> Option<u8> {
    SYMBOLS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(symbol))
        .map(|index| index as u8 + 1)
}

/// Converts an atomic number to its element symbol.
pub fn atomic_number_to_symbol(atomic_number: u8) -> Option<&'static str> {
    let index = (atomic_number as usize).checked_sub(1)?;
    SYMBOLS.get(index).copied()
}
