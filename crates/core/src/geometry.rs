//! Needle and plane geometry
//!
//! `Geometry` pairs the needle length `L` with the spacing `t` between the
//! horizontal grid lines. `Bounds` is the visible region needles land in.

use crate::error::ConfigError;
use serde::Deserialize;

/// Needle length and line spacing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Geometry {
    /// Needle length `L`
    pub needle_length: f64,
    /// Distance `t` between adjacent grid lines
    pub line_spacing: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            needle_length: 1.0,
            line_spacing: 1.0,
        }
    }
}

impl Geometry {
    /// Create a validated geometry
    pub fn new(needle_length: f64, line_spacing: f64) -> Result<Self, ConfigError> {
        let geometry = Self {
            needle_length,
            line_spacing,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check `0 < L <= t` with both values finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.needle_length.is_finite() && self.needle_length > 0.0) {
            return Err(ConfigError::InvalidLength(self.needle_length));
        }
        if !(self.line_spacing.is_finite() && self.line_spacing > 0.0) {
            return Err(ConfigError::InvalidSpacing(self.line_spacing));
        }
        if self.needle_length > self.line_spacing {
            return Err(ConfigError::NeedleTooLong {
                length: self.needle_length,
                spacing: self.line_spacing,
            });
        }
        Ok(())
    }

    /// Half the needle length
    pub fn half_length(&self) -> f64 {
        self.needle_length / 2.0
    }
}

/// Axis-aligned viewing region.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: -3.0,
            x_max: 3.0,
            y_min: -3.0,
            y_max: 3.0,
        }
    }
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Check the region is ordered and large enough to pad by `L/2`
    /// horizontally and `t/2` vertically.
    pub fn validate(&self, geometry: &Geometry) -> Result<(), ConfigError> {
        for (axis, min, max) in [('x', self.x_min, self.x_max), ('y', self.y_min, self.y_max)] {
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(ConfigError::InvalidBounds { axis, min, max });
            }
        }
        if self.width() < geometry.needle_length {
            return Err(ConfigError::BoundsTooSmall {
                axis: 'x',
                extent: self.width(),
                required: geometry.needle_length,
            });
        }
        if self.height() < geometry.line_spacing {
            return Err(ConfigError::BoundsTooSmall {
                axis: 'y',
                extent: self.height(),
                required: geometry.line_spacing,
            });
        }
        Ok(())
    }

    /// Interval the needle center's x is drawn from
    pub fn center_x_range(&self, geometry: &Geometry) -> (f64, f64) {
        let pad = geometry.half_length();
        (self.x_min + pad, self.x_max - pad)
    }

    /// Interval the needle center's y is drawn from
    pub fn center_y_range(&self, geometry: &Geometry) -> (f64, f64) {
        let pad = geometry.line_spacing / 2.0;
        (self.y_min + pad, self.y_max - pad)
    }

    /// Heights of every grid line needed to cover the region, with one
    /// extra line beyond each edge.
    pub fn grid_lines(&self, geometry: &Geometry) -> Vec<f64> {
        let t = geometry.line_spacing;
        let first = (self.y_min / t).floor() as i64 - 1;
        let last = (self.y_max / t).ceil() as i64 + 1;
        (first..=last).map(|k| k as f64 * t).collect()
    }
}
