//! Propulsion system descriptors and propellant sizing.
//!
//! The catalog is fixed at four flight-proven (or at least flight-plausible)
//! system classes. Each entry carries the performance numbers the mission
//! layer filters against; nothing here is mutable at runtime.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The supported propulsion system classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropulsionKind {
    Chemical,
    Ion,
    Nuclear,
    Solar,
}

impl PropulsionKind {
    /// Lowercase identifier used in requests and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropulsionKind::Chemical => "chemical",
            PropulsionKind::Ion => "ion",
            PropulsionKind::Nuclear => "nuclear",
            PropulsionKind::Solar => "solar",
        }
    }
}

impl fmt::Display for PropulsionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an identifier does not match any cataloged propulsion kind.
#[derive(Debug, Error)]
#[error("unknown propulsion kind '{0}'")]
pub struct UnknownPropulsion(pub String);

impl FromStr for PropulsionKind {
    type Err = UnknownPropulsion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chemical" => Ok(PropulsionKind::Chemical),
            "ion" => Ok(PropulsionKind::Ion),
            "nuclear" => Ok(PropulsionKind::Nuclear),
            "solar" => Ok(PropulsionKind::Solar),
            other => Err(UnknownPropulsion(other.to_string())),
        }
    }
}

/// Performance characteristics of a propulsion system class.
///
/// `specific_impulse_s` is `f64::INFINITY` for the solar sail, which carries
/// no propellant at all.
#[derive(Debug, Clone, Copy)]
pub struct PropulsionProfile {
    pub kind: PropulsionKind,
    pub name: &'static str,
    pub specific_impulse_s: f64,
    pub max_delta_v_km_s: f64,
    pub thrust_to_weight: f64,
    pub efficiency: f64,
}

/// Static propulsion catalog, initialized at compile time and never mutated.
pub mod catalog {
    use super::{PropulsionKind, PropulsionProfile};

    static CATALOG: [PropulsionProfile; 4] = [
        PropulsionProfile {
            kind: PropulsionKind::Chemical,
            name: "Chemical Rocket",
            specific_impulse_s: 450.0,
            max_delta_v_km_s: 15.0,
            thrust_to_weight: 1.5,
            efficiency: 0.3,
        },
        PropulsionProfile {
            kind: PropulsionKind::Ion,
            name: "Ion Drive",
            specific_impulse_s: 3000.0,
            max_delta_v_km_s: 25.0,
            thrust_to_weight: 0.001,
            efficiency: 0.8,
        },
        PropulsionProfile {
            kind: PropulsionKind::Nuclear,
            name: "Nuclear Thermal",
            specific_impulse_s: 900.0,
            max_delta_v_km_s: 30.0,
            thrust_to_weight: 0.3,
            efficiency: 0.6,
        },
        PropulsionProfile {
            kind: PropulsionKind::Solar,
            name: "Solar Sail",
            specific_impulse_s: f64::INFINITY,
            max_delta_v_km_s: 12.0,
            thrust_to_weight: 0.0001,
            efficiency: 1.0,
        },
    ];

    /// Look up the profile for a propulsion kind.
    pub fn lookup(kind: PropulsionKind) -> &'static PropulsionProfile {
        match kind {
            PropulsionKind::Chemical => &CATALOG[0],
            PropulsionKind::Ion => &CATALOG[1],
            PropulsionKind::Nuclear => &CATALOG[2],
            PropulsionKind::Solar => &CATALOG[3],
        }
    }

    /// The full catalog, in declaration order.
    pub fn all() -> &'static [PropulsionProfile] {
        &CATALOG
    }
}

/// Tsiolkovsky rocket-equation propellant sizing.
pub mod fuel {
    use atlas_core::constants::G0;
    use atlas_core::units::ms_to_kms;

    /// Propellant mass needed to deliver `delta_v_km_s` to a dry mass.
    ///
    /// Infinite specific impulse (a propellant-less sail) short-circuits to
    /// exactly zero before the exponential so no NaN or overflow can form.
    pub fn required_fuel_mass(delta_v_km_s: f64, specific_impulse_s: f64, dry_mass_kg: f64) -> f64 {
        if !specific_impulse_s.is_finite() {
            return 0.0;
        }
        let exhaust_velocity_km_s = ms_to_kms(specific_impulse_s * G0);
        let mass_ratio = (delta_v_km_s / exhaust_velocity_km_s).exp();
        dry_mass_kg * (mass_ratio - 1.0)
    }
}
