//! Shared plumbing for the intercept CLI binaries.

pub mod logging;
