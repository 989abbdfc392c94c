//! Running π estimate from Buffon's relation
//!
//! For a needle of length `L <= t` the crossing probability is
//! `2L / (πt)`, so `π ≈ 2·L·trials / (crossings·t)`.

use std::f64::consts::PI;
use std::fmt;

/// Precision used when an estimate is formatted without one
pub const DEFAULT_PRECISION: usize = 5;

/// Result of the estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PiEstimate {
    /// No crossings yet; the relation has no finite value
    Undefined,
    /// A finite estimate
    Value(f64),
}

impl PiEstimate {
    /// The numeric value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            PiEstimate::Undefined => None,
            PiEstimate::Value(v) => Some(*v),
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, PiEstimate::Value(_))
    }

    /// `|estimate - π| / π`, if defined
    pub fn relative_error(&self) -> Option<f64> {
        self.value().map(|v| (v - PI).abs() / PI)
    }
}

impl fmt::Display for PiEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PiEstimate::Undefined => f.write_str("undefined"),
            PiEstimate::Value(v) => {
                let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
                write!(f, "{:.*}", precision, v)
            }
        }
    }
}

/// Estimate π from cumulative counts.
pub fn estimate_pi(
    crossings: u64,
    trials: u64,
    needle_length: f64,
    line_spacing: f64,
) -> PiEstimate {
    if crossings == 0 {
        return PiEstimate::Undefined;
    }
    PiEstimate::Value((2.0 * needle_length * trials as f64) / (crossings as f64 * line_spacing))
}
