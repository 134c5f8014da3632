//! Launch-window grid search over the reference trajectory models.

use std::cmp::Ordering;

use atlas_config::SearchTuning;
use atlas_core::constants::MU_SUN_KM3_S2;
use atlas_core::time::days_to_seconds;
use atlas_core::vector::{norm, sub};
use atlas_ephemeris::{earth_state, target_position_at_offset};
use atlas_impulsive::lambert;
use atlas_propulsion::PropulsionProfile;
use atlas_propulsion::fuel::required_fuel_mass;
use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use super::round_dp;

/// A feasible launch/arrival pairing within the propulsion budget.
#[derive(Debug, Clone)]
pub struct TransferWindow {
    pub launch: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub flight_time_days: u32,
    /// Rounded to 2 decimals; ranking runs on this value.
    pub delta_v_km_s: f64,
    /// Rounded to 1 decimal.
    pub fuel_required_kg: f64,
    /// Budget headroom: max delta-V over required delta-V, rounded to 2 decimals.
    pub efficiency_score: f64,
}

/// Scan the (launch offset, flight duration) grid for feasible intercepts.
///
/// Candidates whose required delta-V exceeds the propulsion budget are
/// dropped; a candidate producing a non-finite delta-V is skipped with a
/// warning and the scan continues. The result is sorted ascending by
/// delta-V (stable, so grid order breaks ties) and truncated to
/// `tuning.max_windows`. Output is fully deterministic for fixed inputs.
pub fn search(
    profile: &PropulsionProfile,
    payload_mass_kg: f64,
    start: DateTime<Utc>,
    tuning: &SearchTuning,
) -> Vec<TransferWindow> {
    let launch_step = tuning.launch_step_days.max(1) as usize;
    let flight_step = tuning.flight_step_days.max(1) as usize;
    let origin = earth_state();

    let mut windows = Vec::new();
    let mut evaluated = 0usize;

    'scan: for launch_offset in (0..tuning.search_horizon_days).step_by(launch_step) {
        let launch = start + Duration::days(i64::from(launch_offset));
        let target_position = target_position_at_offset(f64::from(launch_offset));

        for flight_time_days in
            (tuning.min_flight_days..tuning.max_flight_days).step_by(flight_step)
        {
            if evaluated >= tuning.max_candidates {
                warn!(evaluated, "candidate cap reached, stopping window scan early");
                break 'scan;
            }
            evaluated += 1;

            let tof_s = days_to_seconds(f64::from(flight_time_days));
            let estimate =
                lambert::estimate(origin.position_km, target_position, tof_s, MU_SUN_KM3_S2);

            let required_delta_v =
                norm(&sub(&estimate.departure_velocity_km_s, &origin.velocity_km_s));
            if !required_delta_v.is_finite() {
                warn!(
                    launch_offset,
                    flight_time_days, "skipping candidate with non-finite delta-V"
                );
                continue;
            }
            if required_delta_v > profile.max_delta_v_km_s {
                continue;
            }

            let fuel_required =
                required_fuel_mass(required_delta_v, profile.specific_impulse_s, payload_mass_kg);

            windows.push(TransferWindow {
                launch,
                arrival: launch + Duration::days(i64::from(flight_time_days)),
                flight_time_days,
                delta_v_km_s: round_dp(required_delta_v, 2),
                fuel_required_kg: round_dp(fuel_required, 1),
                efficiency_score: round_dp(profile.max_delta_v_km_s / required_delta_v, 2),
            });
        }
    }

    windows.sort_by(|a, b| {
        a.delta_v_km_s
            .partial_cmp(&b.delta_v_km_s)
            .unwrap_or(Ordering::Equal)
    });
    windows.truncate(tuning.max_windows);

    info!(
        propulsion = %profile.kind,
        evaluated,
        feasible = windows.len(),
        "window scan complete"
    );
    windows
}
