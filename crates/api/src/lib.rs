//! Typed request/response boundary for the intercept service.
//!
//! The service is stateless: one instance is constructed at startup holding
//! only the search tuning, every method takes explicit inputs (including
//! `now`, so callers control determinism) and returns an explicit value.
//! The serde shapes mirror the JSON contract of whatever HTTP host mounts
//! this service; nothing here depends on a web framework.

mod types;

use std::collections::BTreeMap;
use std::str::FromStr;

use atlas_config::SearchTuning;
use atlas_propulsion::{PropulsionKind, catalog};
use atlas_transfer::mission::{chase, windows};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::json;
use thiserror::Error;
use tracing::info;

pub use types::*;

/// Request-boundary failures with HTTP-equivalent status codes.
///
/// An empty search result is NOT an error; it is reported as a structured
/// negative payload by [`InterceptService::optimal_window`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid propulsion type")]
    InvalidPropulsion(String),
    #[error("invalid launch date '{0}'")]
    InvalidLaunchDate(String),
    #[error("{error}")]
    Internal { error: String, details: String },
}

impl ApiError {
    /// HTTP status the hosting layer should map this error to.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidPropulsion(_) | ApiError::InvalidLaunchDate(_) => 400,
            ApiError::Internal { .. } => 500,
        }
    }

    /// JSON body the hosting layer should serialize for this error.
    pub fn body(&self) -> serde_json::Value {
        match self {
            ApiError::InvalidPropulsion(_) => json!({ "error": "Invalid propulsion type" }),
            ApiError::InvalidLaunchDate(date) => {
                json!({ "error": "Invalid launch date", "details": date })
            }
            ApiError::Internal { error, details } => {
                json!({ "error": error, "details": details })
            }
        }
    }
}

/// Stateless computation service behind the JSON boundary.
#[derive(Debug, Clone, Default)]
pub struct InterceptService {
    tuning: SearchTuning,
}

impl InterceptService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tuning(tuning: SearchTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &SearchTuning {
        &self.tuning
    }

    /// Ranked feasible windows for a request, best (lowest delta-V) first.
    pub fn ranked_windows(
        &self,
        request: &OptimalWindowRequest,
        now: DateTime<Utc>,
    ) -> Result<Vec<windows::TransferWindow>, ApiError> {
        let profile = catalog::lookup(parse_kind(&request.propulsion)?);
        info!(
            propulsion = %profile.kind,
            payload_mass_kg = request.payload_mass,
            "searching intercept windows"
        );
        Ok(windows::search(
            profile,
            request.payload_mass,
            now,
            &self.tuning,
        ))
    }

    /// Run the window search and shape the best candidate (plus up to three
    /// alternates) into the wire payload. Zero candidates yields the
    /// negative payload, not an error.
    pub fn optimal_window(
        &self,
        request: &OptimalWindowRequest,
        now: DateTime<Utc>,
    ) -> Result<OptimalWindowResponse, ApiError> {
        let profile = catalog::lookup(parse_kind(&request.propulsion)?);
        let ranked = self.ranked_windows(request, now)?;

        let Some(best) = ranked.first() else {
            return Ok(OptimalWindowResponse::NoWindow(NoWindowResponse {
                success: false,
                intercept_success: false,
                explanation: format!(
                    "No feasible intercept windows found with {} propulsion system.",
                    request.propulsion
                ),
                suggestion: "Try nuclear or ion propulsion for better performance.".to_string(),
            }));
        };

        Ok(OptimalWindowResponse::Found(WindowFoundResponse {
            success: true,
            intercept_success: true,
            optimal_launch_date: format_epoch(best.launch),
            arrival_date: format_epoch(best.arrival),
            travel_time: best.flight_time_days,
            delta_v: format!("{:.2}", best.delta_v_km_s),
            fuel_required: best.fuel_required_kg as i64,
            explanation: format!(
                "Optimal launch window found! The {} can successfully intercept 3I/ATLAS with {} km/s delta-V.",
                profile.name, best.delta_v_km_s
            ),
            educational_note: format!(
                "This window is optimal because it minimizes the required velocity change. Efficiency score: {}",
                best.efficiency_score
            ),
            alternative_windows: ranked
                .iter()
                .skip(1)
                .take(3)
                .map(AlternativeWindow::from_window)
                .collect(),
        }))
    }

    /// Direct-chase outcome for a request, before response shaping.
    pub fn chase_outcome(
        &self,
        request: &AnytimeChaseRequest,
        now: DateTime<Utc>,
    ) -> Result<chase::MissionOutcome, ApiError> {
        let profile = catalog::lookup(parse_kind(&request.propulsion)?);
        let launch = parse_launch_date(&request.launch_date)?;
        info!(
            propulsion = %profile.kind,
            launch_date = %request.launch_date,
            "estimating direct chase"
        );
        Ok(chase::estimate(profile, request.payload_mass, launch, now))
    }

    /// Evaluate one fixed launch date and shape the outcome for the wire.
    pub fn anytime_chase(
        &self,
        request: &AnytimeChaseRequest,
        now: DateTime<Utc>,
    ) -> Result<ChaseResponse, ApiError> {
        Ok(ChaseResponse::from_outcome(
            &self.chase_outcome(request, now)?,
        ))
    }

    /// Dump the full propulsion catalog, keyed by identifier.
    pub fn propulsion_info(&self) -> BTreeMap<&'static str, PropulsionInfo> {
        catalog::all()
            .iter()
            .map(|profile| (profile.kind.as_str(), PropulsionInfo::from_profile(profile)))
            .collect()
    }

    /// Liveness payload; touches no mission logic.
    pub fn health(&self, now: DateTime<Utc>) -> HealthResponse {
        HealthResponse {
            status: "healthy",
            timestamp: format_epoch(now),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Render an epoch in the RFC 3339 form the JSON contract uses.
pub fn format_epoch(epoch: DateTime<Utc>) -> String {
    epoch.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a launch date, accepting RFC 3339 (`Z` or numeric offset), naive
/// date-times with or without fractional seconds, and bare dates.
pub fn parse_launch_date(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed.and_utc());
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }
    Err(ApiError::InvalidLaunchDate(raw.to_string()))
}

fn parse_kind(identifier: &str) -> Result<PropulsionKind, ApiError> {
    PropulsionKind::from_str(identifier).map_err(|err| ApiError::InvalidPropulsion(err.0))
}
