//! Mission estimators built on the reference trajectory models.

pub mod chase;
pub mod windows;

/// Round to a fixed number of decimal places, matching the precision the
/// wire contract reports.
pub(crate) fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
