//! Buffon Core: needle sampling and π estimation
//!
//! Drop needles of length `L` on a plane ruled with horizontal lines `t`
//! apart (`L <= t`). The fraction that land across a line tends to
//! `2L / (πt)`, which gives a running estimate of π.
//!
//! Nothing here draws anything; display layers receive a
//! [`TrialReport`] per needle and decide how to show it.
//!
//! # Modules
//!
//! - `geometry`: needle length, line spacing, viewing bounds
//! - `needle`: the crossing test and the uniform sampler
//! - `estimate`: Buffon's relation and the `PiEstimate` result
//! - `simulation`: running counts and the per-trial driver
//! - `trials`: parsing the requested trial count with a fallback
//! - `config`: defaults and TOML overrides
//! - `error`: setup and input errors

pub mod config;
pub mod error;
pub mod estimate;
pub mod geometry;
pub mod needle;
pub mod simulation;
pub mod trials;

pub use config::{DEFAULT_INTERVAL_MS, DEFAULT_TRIALS, SimulationConfig};
pub use error::{ConfigError, LoadConfigError, ParseTrialsError};
pub use estimate::{PiEstimate, estimate_pi};
pub use geometry::{Bounds, Geometry};
pub use needle::{Needle, Sampler, crosses_line, distance_to_line};
pub use simulation::{Simulation, SimulationState, TrialObserver, TrialReport};
pub use trials::{TrialCount, parse_trials, resolve_trials};
