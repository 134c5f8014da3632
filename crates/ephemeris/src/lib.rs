//! Reference trajectory models used by the window search.
//!
//! These are deliberately coarse placeholder models, not real ephemerides:
//! a fixed Earth state and a linear target track. The window-search numbers
//! are calibrated against exactly these values, so they must not be swapped
//! for higher-fidelity data without recalibrating the mission layer.

use atlas_core::vector::Vector3;

pub mod target;

/// Position and velocity of a body at some epoch.
#[derive(Debug, Clone, Copy)]
pub struct StateVector {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// Earth state at launch. Position is in millions of km, velocity in km/s;
/// the mixed scale is part of the calibrated reference model.
pub fn earth_state() -> StateVector {
    StateVector {
        position_km: [149.6, 0.0, 0.0],
        velocity_km_s: [0.0, 29.8, 0.0],
    }
}

/// Target position as a linear function of the launch-date offset.
pub fn target_position_at_offset(day_offset: f64) -> Vector3 {
    [200.0 + day_offset * 0.5, 50.0, 30.0]
}
