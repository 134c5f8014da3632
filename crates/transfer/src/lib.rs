//! Mission-layer crate consolidating the window search and chase estimator.

pub mod mission;

pub use facade::*;
pub use atlas_impulsive as impulsive;
pub use atlas_propulsion as propulsion;

mod facade;
