//! Error types for simulation setup and input handling.

use std::fmt;

/// An invalid geometric setup, detected before any needle is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Needle longer than the line spacing (`L > t`)
    NeedleTooLong { length: f64, spacing: f64 },
    /// Needle length is zero, negative, NaN or infinite
    InvalidLength(f64),
    /// Line spacing is zero, negative, NaN or infinite
    InvalidSpacing(f64),
    /// Bounds are not finite or not ordered (`min < max`)
    InvalidBounds {
        axis: char,
        min: f64,
        max: f64,
    },
    /// Bounds leave no room for the padded center interval
    BoundsTooSmall {
        axis: char,
        extent: f64,
        required: f64,
    },
    /// Fallback trial count must itself be usable
    ZeroDefaultTrials,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NeedleTooLong { length, spacing } => write!(
                f,
                "needle length {} exceeds line spacing {} (requires L <= t)",
                length, spacing
            ),
            ConfigError::InvalidLength(l) => {
                write!(f, "needle length must be positive and finite, got {}", l)
            }
            ConfigError::InvalidSpacing(t) => {
                write!(f, "line spacing must be positive and finite, got {}", t)
            }
            ConfigError::InvalidBounds { axis, min, max } => write!(
                f,
                "{} bounds must be finite with min < max, got [{}, {}]",
                axis, min, max
            ),
            ConfigError::BoundsTooSmall {
                axis,
                extent,
                required,
            } => write!(
                f,
                "{} bounds span {} but at least {} is needed to keep needles in view",
                axis, extent, required
            ),
            ConfigError::ZeroDefaultTrials => write!(f, "default trial count must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A trial count that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTrialsError {
    /// Input is not an integer at all
    NotANumber(String),
    /// Input is an integer but not a positive one
    NotPositive(i128),
}

impl fmt::Display for ParseTrialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTrialsError::NotANumber(s) => write!(f, "'{}' is not an integer", s),
            ParseTrialsError::NotPositive(n) => {
                write!(f, "trial count must be positive, got {}", n)
            }
        }
    }
}

impl std::error::Error for ParseTrialsError {}

/// Failure to load a configuration file.
#[derive(Debug)]
pub enum LoadConfigError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not valid TOML for a simulation config
    Parse(toml::de::Error),
    /// The file parsed but describes an invalid setup
    Invalid(ConfigError),
}

impl fmt::Display for LoadConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadConfigError::Io(e) => write!(f, "could not read config: {}", e),
            LoadConfigError::Parse(e) => write!(f, "could not parse config: {}", e),
            LoadConfigError::Invalid(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for LoadConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadConfigError::Io(e) => Some(e),
            LoadConfigError::Parse(e) => Some(e),
            LoadConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadConfigError {
    fn from(e: std::io::Error) -> Self {
        LoadConfigError::Io(e)
    }
}

impl From<toml::de::Error> for LoadConfigError {
    fn from(e: toml::de::Error) -> Self {
        LoadConfigError::Parse(e)
    }
}

impl From<ConfigError> for LoadConfigError {
    fn from(e: ConfigError) -> Self {
        LoadConfigError::Invalid(e)
    }
}
