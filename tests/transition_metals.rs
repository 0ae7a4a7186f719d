mod common;

use common::{case, run_group_test};
use slater::{
    OrbitalType, ShieldingCalculator, ShieldingRule, compute_effective_nuclear_charge,
    get_default_configurations,
};

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_first_row_transition_metals() {
    // 4s outer: (n-1)d electrons screen fully, like the deeper shells.
    run_group_test(
        "First-Row Transition Metals",
        vec![
            case("Scandium", 21, 1.0 * 0.35 + 8.0 * 0.85 + 1.0 + 10.0),
            case("Chromium", 24, 8.0 * 0.85 + 5.0 + 10.0),
            case("Iron", 26, 1.0 * 0.35 + 8.0 * 0.85 + 6.0 + 10.0),
            case("Copper", 29, 8.0 * 0.85 + 10.0 + 10.0),
            case("Zinc", 30, 1.0 * 0.35 + 8.0 * 0.85 + 10.0 + 10.0),
        ],
        TOLERANCE,
    );
}

#[test]
fn test_post_transition_p_block() {
    run_group_test(
        "Post-Transition p Block",
        vec![
            case("Gallium", 31, 2.0 * 0.35 + 8.0 * 0.85 + 10.0 + 10.0),
            case("Lead", 82, 3.0 * 0.35 + 8.0 * 0.85 + 10.0 + 60.0),
            case("Bismuth", 83, 4.0 * 0.35 + 8.0 * 0.85 + 10.0 + 60.0),
        ],
        TOLERANCE,
    );
}

#[test]
fn test_heavy_s_block_elements() {
    run_group_test(
        "Heavy Elements",
        vec![
            case("Gold", 79, 8.0 * 0.85 + 10.0 + 60.0),
            case("Mercury", 80, 1.0 * 0.35 + 8.0 * 0.85 + 10.0 + 60.0),
            case("Cerium", 58, 1.0 * 0.35 + 8.0 * 0.85 + 1.0 + 47.0),
            case("Uranium", 92, 1.0 * 0.35 + 8.0 * 0.85 + 1.0 + 81.0),
        ],
        TOLERANCE,
    );
}

#[test]
fn test_palladium_uses_d_outer_rule() {
    // [Kr] 4d10 has no 5s electron, so the screened electron is 4d.
    let calculator = ShieldingCalculator::new(get_default_configurations());
    let palladium = calculator.calculate(46).unwrap();

    assert_eq!(
        palladium.rule,
        ShieldingRule::Inner {
            shell: 4,
            orbital: OrbitalType::D
        }
    );
    assert_eq!(palladium.buckets.same_group, 9);
    assert_eq!(palladium.buckets.deeper, 36);
    assert!((palladium.shielding - (9.0 * 0.35 + 36.0)).abs() < TOLERANCE);
    assert!((palladium.effective_charge - 6.85).abs() < TOLERANCE);
}

#[test]
fn test_explicit_d_outer_configuration() {
    // A 3d outer electron is screened fully by 3s and 3p, unlike a 4s electron.
    let configuration = "[Ar] 3d2".parse().unwrap();
    let z_eff = compute_effective_nuclear_charge(20, &configuration).unwrap();
    assert!((z_eff - (20.0 - (0.35 + 18.0))).abs() < TOLERANCE);
}
