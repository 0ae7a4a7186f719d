mod common;

use common::{case, run_group_test};

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_first_period() {
    run_group_test(
        "First Period",
        vec![case("Hydrogen", 1, 0.0), case("Helium", 2, 1.0 * 0.30)],
        TOLERANCE,
    );
}

#[test]
fn test_second_period() {
    run_group_test(
        "Second Period",
        vec![
            case("Lithium", 3, 2.0 * 0.85),
            case("Beryllium", 4, 1.0 * 0.35 + 2.0 * 0.85),
            case("Boron", 5, 2.0 * 0.35 + 2.0 * 0.85),
            case("Carbon", 6, 3.0 * 0.35 + 2.0 * 0.85),
            case("Nitrogen", 7, 4.0 * 0.35 + 2.0 * 0.85),
            case("Oxygen", 8, 5.0 * 0.35 + 2.0 * 0.85),
            case("Fluorine", 9, 6.0 * 0.35 + 2.0 * 0.85),
            case("Neon", 10, 7.0 * 0.35 + 2.0 * 0.85),
        ],
        TOLERANCE,
    );
}

#[test]
fn test_third_period() {
    run_group_test(
        "Third Period",
        vec![
            case("Sodium", 11, 8.0 * 0.85 + 2.0),
            case("Magnesium", 12, 1.0 * 0.35 + 8.0 * 0.85 + 2.0),
            case("Aluminium", 13, 2.0 * 0.35 + 8.0 * 0.85 + 2.0),
            case("Silicon", 14, 3.0 * 0.35 + 8.0 * 0.85 + 2.0),
            case("Phosphorus", 15, 4.0 * 0.35 + 8.0 * 0.85 + 2.0),
            case("Sulfur", 16, 5.0 * 0.35 + 8.0 * 0.85 + 2.0),
            case("Chlorine", 17, 6.0 * 0.35 + 8.0 * 0.85 + 2.0),
            case("Argon", 18, 7.0 * 0.35 + 8.0 * 0.85 + 2.0),
        ],
        TOLERANCE,
    );
}

#[test]
fn test_alkali_metals() {
    // A lone ns1 electron behind a full (n-1)s2 (n-1)p6 shell always sees Z_eff = 2.20.
    run_group_test(
        "Alkali Metals",
        vec![
            case("Lithium", 3, 1.7),
            case("Sodium", 11, 8.8),
            case("Potassium", 19, 16.8),
            case("Rubidium", 37, 34.8),
            case("Caesium", 55, 52.8),
            case("Francium", 87, 84.8),
        ],
        TOLERANCE,
    );
}

#[test]
fn test_halogens_and_noble_gases() {
    run_group_test(
        "Halogens and Noble Gases",
        vec![
            case("Chlorine", 17, 10.9),
            case("Bromine", 35, 28.9),
            case("Iodine", 53, 46.9),
            case("Argon", 18, 11.25),
            case("Krypton", 36, 29.25),
            case("Xenon", 54, 47.25),
            case("Radon", 86, 79.25),
        ],
        TOLERANCE,
    );
}
