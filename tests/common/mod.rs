use slater::{ShieldingCalculator, get_default_configurations};

pub struct TestCase<'a> {
    pub name: &'a str,
    pub atomic_number: u8,
    pub expected_shielding: f64,
    pub expected_z_eff: f64,
}

/// Builds a case whose expected Z_eff follows from Z - S.
pub fn case(name: &str, atomic_number: u8, expected_shielding: f64) -> TestCase<'_> {
    TestCase {
        name,
        atomic_number,
        expected_shielding,
        expected_z_eff: atomic_number as f64 - expected_shielding,
    }
}

pub fn run_group_test(group_name: &str, cases: Vec<TestCase>, tolerance: f64) {
    let calculator = ShieldingCalculator::new(get_default_configurations());

    let mut group_max_error: f64 = 0.0;
    let mut failures = Vec::new();

    println!("\nRunning Group Test: {}", group_name);
    println!("{:-<80}", "");
    println!(
        "{:<12} | {:<4} | {:<10} | {:<10} | {:<10} | {:<10}",
        "Element", "Z", "S (exp)", "S (calc)", "Zeff (exp)", "Zeff (calc)"
    );

    for case in &cases {
        let result = calculator
            .calculate(case.atomic_number)
            .expect("Calculation failed");

        let shielding_error = (result.shielding - case.expected_shielding).abs();
        let z_eff_error = (result.effective_charge - case.expected_z_eff).abs();
        let error = shielding_error.max(z_eff_error);

        println!(
            "{:<12} | {:<4} | {:<10.4} | {:<10.4} | {:<10.4} | {:<10.4}",
            case.name,
            case.atomic_number,
            case.expected_shielding,
            result.shielding,
            case.expected_z_eff,
            result.effective_charge
        );

        group_max_error = group_max_error.max(error);
        if error > tolerance {
            failures.push(case.name);
        }
    }

    println!("{:-<80}", "");
    println!("Group Statistics for '{}':", group_name);
    println!("  Elements:        {}", cases.len());
    println!(
        "  Group Max Error: {:.2e} (Limit: {:.2e})",
        group_max_error, tolerance
    );
    println!("{:-<80}\n", "");

    assert!(
        failures.is_empty(),
        "Elements outside tolerance {:.2e}: {:?}",
        tolerance,
        failures
    );
}
