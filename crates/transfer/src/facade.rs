//! Re-exported APIs for consumers of the transfer crate.

pub use crate::mission::chase::{
    FailureReason, MissionFailure, MissionOutcome, estimate as chase_estimate,
};
pub use crate::mission::windows::{TransferWindow, search as window_search};
pub use atlas_propulsion::{PropulsionKind, PropulsionProfile, UnknownPropulsion, catalog};
