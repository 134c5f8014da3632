//! Configuration models and loaders for the intercept calculator.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Grid bounds and caps for the launch-window search.
///
/// Every field has a default, so a tuning file only needs to name the
/// values it overrides.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchTuning {
    /// How far into the future launch dates are scanned.
    pub search_horizon_days: u32,
    /// Spacing between candidate launch dates.
    pub launch_step_days: u32,
    pub min_flight_days: u32,
    pub max_flight_days: u32,
    pub flight_step_days: u32,
    /// Number of ranked windows returned to the caller.
    pub max_windows: usize,
    /// Hard cap on grid evaluations, guarding against hostile horizons.
    pub max_candidates: usize,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            search_horizon_days: 365,
            launch_step_days: 10,
            min_flight_days: 60,
            max_flight_days: 400,
            flight_step_days: 30,
            max_windows: 5,
            max_candidates: 10_000,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load search tuning from a TOML or YAML file, dispatching on extension.
pub fn load_tuning<P: AsRef<Path>>(path: P) -> Result<SearchTuning, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let tuning: SearchTuning = toml::from_str(&contents)?;
        Ok(tuning)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
