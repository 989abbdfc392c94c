//! Simulation configuration
//!
//! Built-in defaults match the classic setup: a unit needle on unit-spaced
//! lines, viewed over `[-3, 3] x [-3, 3]`. A TOML file can override any
//! subset of the fields:
//!
//! ```toml
//! interval_ms = 25
//! seed = 42
//!
//! [geometry]
//! needle_length = 0.8
//! line_spacing = 1.0
//!
//! [bounds]
//! x_min = -4.0
//! x_max = 4.0
//! ```

use crate::error::{ConfigError, LoadConfigError};
use crate::geometry::{Bounds, Geometry};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Trial count used when the requested count is unusable
pub const DEFAULT_TRIALS: u64 = 300;

/// Delay between needle drops in the live view, in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub geometry: Geometry,
    pub bounds: Bounds,
    /// Delay between drops in the live view (floored at 1 ms)
    pub interval_ms: u64,
    /// Fallback trial count for invalid input
    pub default_trials: u64,
    /// Fixed generator seed; `None` draws fresh entropy every run
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            bounds: Bounds::default(),
            interval_ms: DEFAULT_INTERVAL_MS,
            default_trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_interval_ms(mut self, ms: u64) -> Self {
        self.interval_ms = ms;
        self
    }

    /// Update interval, never shorter than one millisecond
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    /// Check the geometry and bounds describe a usable setup
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_trials == 0 {
            return Err(ConfigError::ZeroDefaultTrials);
        }
        self.geometry.validate()?;
        self.bounds.validate(&self.geometry)
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(text: &str) -> Result<Self, LoadConfigError> {
        let config: SimulationConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, LoadConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded simulation config");
        Ok(config)
    }
}
