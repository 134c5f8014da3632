//! Impulsive transfer utilities: the reduced geometric Lambert estimator.

pub mod lambert;

pub use lambert::{TransferBranch, TransferEstimate, estimate as lambert_estimate};
