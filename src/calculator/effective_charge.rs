use crate::data::check_electron_count;
use crate::error::SlaterError;
use crate::shielding::ShieldingRule;
use crate::types::{ElectronConfiguration, ShieldingResult};
use tracing::trace;

/// Computes the Slater effective nuclear charge felt by the outermost electron.
///
/// This is [`compute_shielding`] without the breakdown: Z - S.
///
/// # Errors
///
/// Returns `SlaterError::InvalidConfiguration` when the configuration does not hold exactly
/// `atomic_number` electrons.
///
/// # Examples
///
/// ```
/// use slater::compute_effective_nuclear_charge;
///
/// let sodium = "[Ne] 3s1".parse().unwrap();
/// let z_eff = compute_effective_nuclear_charge(11, &sodium).unwrap();
/// assert!((z_eff - 2.2).abs() < 1e-9);
/// ```
pub fn compute_effective_nuclear_charge(
    atomic_number: u8,
    configuration: &ElectronConfiguration,
) -> Result<f64, SlaterError> {
    compute_shielding(atomic_number, configuration).map(|result| result.effective_charge)
}

/// Applies Slater's rules to the outermost electron of `configuration`.
///
/// The outer group is the last group of the configuration. Its orbital type selects the
/// [`ShieldingRule`]; every other electron is then sorted into a screening bucket and the
/// weighted bucket counts are summed into the screening constant S. The result is neither
/// rounded nor clamped.
///
/// # Errors
///
/// Returns `SlaterError::InvalidConfiguration` when the configuration does not hold exactly
/// `atomic_number` electrons. All structural rules are already enforced by
/// [`ElectronConfiguration::new`].
pub fn compute_shielding(
    atomic_number: u8,
    configuration: &ElectronConfiguration,
) -> Result<ShieldingResult, SlaterError> {
    check_electron_count(atomic_number, configuration)?;

    let outer_group = *configuration.outer_group();
    let rule = ShieldingRule::for_group(&outer_group);
    let buckets = rule.partition(configuration);
    let shielding = buckets.shielding(rule.same_group_coefficient());
    let effective_charge = atomic_number as f64 - shielding;

    trace!(
        atomic_number,
        outer = %outer_group,
        ?rule,
        same_group = buckets.same_group,
        adjacent_sp = buckets.adjacent_sp,
        adjacent_df = buckets.adjacent_df,
        deeper = buckets.deeper,
        shielding,
        effective_charge,
        "Applied Slater's rules."
    );

    Ok(ShieldingResult {
        atomic_number,
        outer_group,
        rule,
        buckets,
        shielding,
        effective_charge,
    })
}
