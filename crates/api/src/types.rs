//! Serde shapes for the JSON boundary.
//!
//! Top-level fields are camelCase; the raw window entries inside
//! `alternativeWindows` keep their snake_case field names, exactly as the
//! wire contract emits them.

use atlas_propulsion::PropulsionProfile;
use atlas_transfer::mission::chase::{FailureReason, MissionOutcome};
use atlas_transfer::mission::windows::TransferWindow;
use serde::{Deserialize, Serialize};

use crate::format_epoch;

fn default_propulsion() -> String {
    "chemical".to_string()
}

fn default_payload_mass() -> f64 {
    1000.0
}

/// Body of an optimal-window request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalWindowRequest {
    #[serde(default = "default_propulsion")]
    pub propulsion: String,
    #[serde(default = "default_payload_mass")]
    pub payload_mass: f64,
}

/// Body of an anytime-chase request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnytimeChaseRequest {
    #[serde(default = "default_propulsion")]
    pub propulsion: String,
    #[serde(default = "default_payload_mass")]
    pub payload_mass: f64,
    pub launch_date: String,
}

/// Raw window fields as they appear in `alternativeWindows`.
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeWindow {
    pub launch_date: String,
    pub arrival_date: String,
    pub flight_time_days: u32,
    pub delta_v: f64,
    pub fuel_required: f64,
    pub efficiency_score: f64,
}

impl AlternativeWindow {
    pub fn from_window(window: &TransferWindow) -> Self {
        Self {
            launch_date: format_epoch(window.launch),
            arrival_date: format_epoch(window.arrival),
            flight_time_days: window.flight_time_days,
            delta_v: window.delta_v_km_s,
            fuel_required: window.fuel_required_kg,
            efficiency_score: window.efficiency_score,
        }
    }
}

/// Positive optimal-window payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFoundResponse {
    pub success: bool,
    pub intercept_success: bool,
    pub optimal_launch_date: String,
    pub arrival_date: String,
    pub travel_time: u32,
    pub delta_v: String,
    pub fuel_required: i64,
    pub explanation: String,
    pub educational_note: String,
    pub alternative_windows: Vec<AlternativeWindow>,
}

/// Negative optimal-window payload: a valid result, not an error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoWindowResponse {
    pub success: bool,
    pub intercept_success: bool,
    pub explanation: String,
    pub suggestion: String,
}

/// Either shape of the optimal-window result.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OptimalWindowResponse {
    Found(WindowFoundResponse),
    NoWindow(NoWindowResponse),
}

/// Feasible chase payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaseInterceptResponse {
    pub success: bool,
    pub intercept_success: bool,
    pub launch_date: String,
    pub arrival_date: String,
    pub travel_time: u32,
    pub delta_v: String,
    pub fuel_required: i64,
    pub explanation: String,
    pub educational_note: String,
}

/// Infeasible chase payload with remediation hints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaseMissResponse {
    pub success: bool,
    pub intercept_success: bool,
    pub launch_date: String,
    pub travel_time: u32,
    pub delta_v: String,
    pub fuel_required: i64,
    pub explanation: String,
    pub failure_reason: &'static str,
    pub suggestion: String,
    pub educational_note: String,
}

/// Either shape of the chase result.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChaseResponse {
    Intercept(ChaseInterceptResponse),
    Miss(ChaseMissResponse),
}

impl ChaseResponse {
    /// Shape a mission outcome into the wire payload.
    pub fn from_outcome(outcome: &MissionOutcome) -> Self {
        if let (true, Some(arrival)) = (outcome.feasible, outcome.arrival) {
            ChaseResponse::Intercept(ChaseInterceptResponse {
                success: true,
                intercept_success: true,
                launch_date: format_epoch(outcome.launch),
                arrival_date: format_epoch(arrival),
                travel_time: outcome.flight_time_days,
                delta_v: format!("{:.2}", outcome.delta_v_km_s),
                fuel_required: outcome.fuel_mass_kg as i64,
                explanation: outcome.explanation.clone(),
                educational_note: outcome.educational_note.clone(),
            })
        } else {
            let failure = outcome.failure.as_ref();
            ChaseResponse::Miss(ChaseMissResponse {
                success: false,
                intercept_success: false,
                launch_date: format_epoch(outcome.launch),
                travel_time: outcome.flight_time_days,
                delta_v: format!("{:.2}", outcome.delta_v_km_s),
                fuel_required: outcome.fuel_mass_kg as i64,
                explanation: outcome.explanation.clone(),
                failure_reason: failure
                    .map(|f| f.reason.as_str())
                    .unwrap_or(FailureReason::InsufficientThrust.as_str()),
                suggestion: failure.map(|f| f.suggestion.clone()).unwrap_or_default(),
                educational_note: outcome.educational_note.clone(),
            })
        }
    }
}

/// Catalog entry as serialized by the propulsion-info dump.
#[derive(Debug, Serialize)]
pub struct PropulsionInfo {
    pub name: &'static str,
    /// `null` for the propellant-less solar sail; JSON has no infinity.
    pub specific_impulse: Option<f64>,
    pub max_delta_v: f64,
    pub thrust_to_weight: f64,
    pub efficiency: f64,
}

impl PropulsionInfo {
    pub fn from_profile(profile: &PropulsionProfile) -> Self {
        Self {
            name: profile.name,
            specific_impulse: profile
                .specific_impulse_s
                .is_finite()
                .then_some(profile.specific_impulse_s),
            max_delta_v: profile.max_delta_v_km_s,
            thrust_to_weight: profile.thrust_to_weight,
            efficiency: profile.efficiency,
        }
    }
}

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}
