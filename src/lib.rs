//! Intercept planning for the hyperbolic interstellar object 3I/ATLAS.
//!
//! This façade re-exports the workspace member crates so front-ends (CLI,
//! HTTP hosts, notebooks) can depend on a single crate. The mission logic
//! lives in `transfer`, the JSON boundary in `api`.

pub use atlas_api as api;
pub use atlas_config as config;
pub use atlas_core as core;
pub use atlas_ephemeris as ephemeris;
pub use atlas_export as export;
pub use atlas_impulsive as impulsive;
pub use atlas_propulsion as propulsion;
pub use atlas_transfer as transfer;

/// Returns the version of the library for smoke tests while scaffolding.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
