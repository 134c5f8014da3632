//! Fixed-date intercept estimation via a timing-difficulty heuristic.
//!
//! Unlike the window search this evaluates exactly one launch date: the
//! required delta-V scales with how far the date sits from the 60-day
//! sweet spot, and feasibility is a straight comparison against the
//! propulsion budget.

use atlas_core::constants::SECONDS_PER_DAY;
use atlas_propulsion::PropulsionProfile;
use atlas_propulsion::fuel::required_fuel_mass;
use chrono::{DateTime, Duration, Utc};

const BASE_DELTA_V_KM_S: f64 = 8.0;
const BASE_FLIGHT_TIME_DAYS: f64 = 180.0;

/// Why a requested intercept cannot be flown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    InsufficientThrust,
}

impl FailureReason {
    /// Wire tag for this failure class.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::InsufficientThrust => "insufficient_thrust",
        }
    }
}

/// Failure classification plus a remediation hint for the caller.
#[derive(Debug, Clone)]
pub struct MissionFailure {
    pub reason: FailureReason,
    pub suggestion: String,
}

/// Verdict for a fixed-date intercept attempt.
///
/// On failure `fuel_mass_kg` prices the maximum-capability burn rather than
/// the (unreachable) required one, and `arrival` is `None`.
#[derive(Debug, Clone)]
pub struct MissionOutcome {
    pub feasible: bool,
    pub delta_v_km_s: f64,
    pub fuel_mass_kg: f64,
    pub flight_time_days: u32,
    pub launch: DateTime<Utc>,
    pub arrival: Option<DateTime<Utc>>,
    pub explanation: String,
    pub educational_note: String,
    pub failure: Option<MissionFailure>,
}

/// Estimate a chase launched on exactly `launch`, judged relative to `now`.
pub fn estimate(
    profile: &PropulsionProfile,
    payload_mass_kg: f64,
    launch: DateTime<Utc>,
    now: DateTime<Utc>,
) -> MissionOutcome {
    // Whole days, floored, so a launch 36 hours out counts as 1 day and one
    // 12 hours in the past counts as -1.
    let days_from_now = (launch - now)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY as i64);

    let difficulty_multiplier = if (30..=90).contains(&days_from_now) {
        1.0
    } else {
        1.0 + (days_from_now - 60).abs() as f64 / 100.0
    };

    let required_delta_v = BASE_DELTA_V_KM_S * difficulty_multiplier;
    let flight_time_days =
        (BASE_FLIGHT_TIME_DAYS * (1.0 + (difficulty_multiplier - 1.0) * 0.5)).round() as u32;

    if required_delta_v <= profile.max_delta_v_km_s {
        let fuel_mass_kg =
            required_fuel_mass(required_delta_v, profile.specific_impulse_s, payload_mass_kg);

        MissionOutcome {
            feasible: true,
            delta_v_km_s: required_delta_v,
            fuel_mass_kg,
            flight_time_days,
            launch,
            arrival: Some(launch + Duration::days(i64::from(flight_time_days))),
            explanation: format!(
                "Mission successful! Your spacecraft will intercept 3I/ATLAS in {flight_time_days} days using {required_delta_v:.1} km/s delta-V."
            ),
            educational_note: "Launch timing affects efficiency. Optimal windows typically require 20-30% less delta-V than suboptimal ones.".to_string(),
            failure: None,
        }
    } else {
        // Price the burn the vehicle could actually deliver.
        let fuel_mass_kg = required_fuel_mass(
            profile.max_delta_v_km_s,
            profile.specific_impulse_s,
            payload_mass_kg,
        );
        let timing_hint = if days_from_now > 60 { "earlier" } else { "later" };
        let upgrade_hint = if profile.max_delta_v_km_s < 25.0 {
            "nuclear"
        } else {
            "ion"
        };

        MissionOutcome {
            feasible: false,
            delta_v_km_s: required_delta_v,
            fuel_mass_kg,
            flight_time_days,
            launch,
            arrival: None,
            explanation: format!(
                "Mission failed. Required delta-V ({:.1} km/s) exceeds {} capability ({:.1} km/s).",
                required_delta_v, profile.name, profile.max_delta_v_km_s
            ),
            educational_note: "Interstellar intercepts require precise timing. The target's hyperbolic trajectory means launch windows are critical.".to_string(),
            failure: Some(MissionFailure {
                reason: FailureReason::InsufficientThrust,
                suggestion: format!(
                    "Try launching {timing_hint} for better geometry, or switch to {upgrade_hint} propulsion."
                ),
            }),
        }
    }
}
