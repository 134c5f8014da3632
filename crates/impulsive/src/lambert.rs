//! Reduced geometric Lambert-type transfer estimator.
//!
//! This is not an iterating Lambert solver. It classifies the transfer as
//! elliptic or hyperbolic against the parabolic time-of-flight threshold,
//! assigns a semi-major axis by a fixed scaling of the minimum-energy axis
//! (1.2·a_min elliptic, −0.8·a_min hyperbolic), and evaluates vis-viva at
//! both endpoints. The scaling constants are uncalibrated simplifications;
//! downstream expectations are pinned to them, so leave them alone.

use atlas_core::vector::{Vector3, cross, dot, norm, scale, sub};
use tracing::{trace, warn};

/// Velocity components returned when the transfer geometry degenerates.
pub const FALLBACK_VELOCITY_KM_S: Vector3 = [15.0, 0.0, 0.0];

/// Conic classification of the estimated transfer arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferBranch {
    Elliptic,
    Hyperbolic,
    /// Geometry was degenerate; the velocities are the fixed fallback pair.
    Degraded,
}

/// Endpoint velocities of the estimated transfer arc.
#[derive(Debug, Clone, Copy)]
pub struct TransferEstimate {
    pub departure_velocity_km_s: Vector3,
    pub arrival_velocity_km_s: Vector3,
    pub branch: TransferBranch,
}

impl TransferEstimate {
    fn degraded() -> Self {
        Self {
            departure_velocity_km_s: FALLBACK_VELOCITY_KM_S,
            arrival_velocity_km_s: FALLBACK_VELOCITY_KM_S,
            branch: TransferBranch::Degraded,
        }
    }
}

/// Estimate the transfer connecting `r1_km` to `r2_km` in `time_of_flight_s`.
///
/// Never fails and never returns non-finite components: zero-norm inputs,
/// collinear endpoints, and any non-finite intermediate all collapse to the
/// fallback velocity pair with `TransferBranch::Degraded`. Callers rely on
/// always receiving a usable pair.
pub fn estimate(
    r1_km: Vector3,
    r2_km: Vector3,
    time_of_flight_s: f64,
    mu_km3_s2: f64,
) -> TransferEstimate {
    match solve_geometry(r1_km, r2_km, time_of_flight_s, mu_km3_s2) {
        Some(estimate) => estimate,
        None => {
            warn!(
                ?r1_km,
                ?r2_km,
                time_of_flight_s,
                "degenerate transfer geometry, returning fallback velocities"
            );
            TransferEstimate::degraded()
        }
    }
}

fn solve_geometry(
    r1: Vector3,
    r2: Vector3,
    tof_s: f64,
    mu: f64,
) -> Option<TransferEstimate> {
    if !tof_s.is_finite() || mu <= 0.0 {
        return None;
    }

    let r1_mag = norm(&r1);
    let r2_mag = norm(&r2);
    if r1_mag <= 0.0 || r2_mag <= 0.0 {
        return None;
    }

    let transfer_angle_rad = (dot(&r1, &r2) / (r1_mag * r2_mag)).clamp(-1.0, 1.0).acos();

    let chord = norm(&sub(&r2, &r1));
    let semi_perimeter = (r1_mag + r2_mag + chord) / 2.0;
    let a_min = semi_perimeter / 2.0;

    let tof_parabolic = (1.0 / 3.0)
        * (2.0 / mu).sqrt()
        * (semi_perimeter.powf(1.5) - (semi_perimeter - chord).powf(1.5));

    let (a, branch) = if tof_s > tof_parabolic {
        (1.2 * a_min, TransferBranch::Elliptic)
    } else {
        (-0.8 * a_min, TransferBranch::Hyperbolic)
    };
    trace!(transfer_angle_rad, tof_parabolic, ?branch, "transfer branch selected");

    let v1_mag = (mu * (2.0 / r1_mag - 1.0 / a)).sqrt();
    let v2_mag = (mu * (2.0 / r2_mag - 1.0 / a)).sqrt();

    let h = cross(&r1, &r2);
    let h_mag = norm(&h);
    if h_mag <= 0.0 {
        return None;
    }
    let h_unit = scale(&h, 1.0 / h_mag);

    let v1 = scale(&in_plane_unit(&h_unit, &r1)?, v1_mag);
    let v2 = scale(&in_plane_unit(&h_unit, &r2)?, v2_mag);

    if !is_finite3(&v1) || !is_finite3(&v2) {
        return None;
    }

    Some(TransferEstimate {
        departure_velocity_km_s: v1,
        arrival_velocity_km_s: v2,
        branch,
    })
}

fn in_plane_unit(h_unit: &Vector3, r: &Vector3) -> Option<Vector3> {
    let direction = cross(h_unit, r);
    let mag = norm(&direction);
    if mag <= 0.0 || !mag.is_finite() {
        return None;
    }
    Some(scale(&direction, 1.0 / mag))
}

fn is_finite3(v: &Vector3) -> bool {
    v.iter().all(|c| c.is_finite())
}
