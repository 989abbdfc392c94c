//! Needle sampling
//!
//! A `Sampler` holds a validated geometry and bounds and drops one needle
//! per call. The crossing test itself is the free function
//! [`crosses_line`] so boundary cases can be checked without randomness.

use crate::error::ConfigError;
use crate::geometry::{Bounds, Geometry};
use rand::Rng;
use std::f64::consts::PI;

/// One dropped needle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Needle {
    /// Center x
    pub x: f64,
    /// Center y
    pub y: f64,
    /// Orientation in `[0, π)`
    pub theta: f64,
    /// Whether the needle touches or crosses a grid line
    pub crosses: bool,
}

impl Needle {
    /// Segment endpoints `((x0, y0), (x1, y1))` for a needle of `length`
    pub fn endpoints(&self, length: f64) -> ((f64, f64), (f64, f64)) {
        let dx = length / 2.0 * self.theta.cos();
        let dy = length / 2.0 * self.theta.sin();
        ((self.x - dx, self.y - dy), (self.x + dx, self.y + dy))
    }
}

/// Distance from height `y` to the nearest horizontal line of spacing `t`
pub fn distance_to_line(y: f64, line_spacing: f64) -> f64 {
    let offset = y.rem_euclid(line_spacing);
    offset.min(line_spacing - offset)
}

/// Whether a needle centered at height `y` with orientation `theta` reaches
/// the nearest grid line. A needle that just touches the line counts.
pub fn crosses_line(y: f64, theta: f64, geometry: &Geometry) -> bool {
    geometry.half_length() * theta.sin() >= distance_to_line(y, geometry.line_spacing)
}

/// Draws needles uniformly inside a padded region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    geometry: Geometry,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Sampler {
    /// Validate the setup. Fails before any needle can be drawn.
    pub fn new(geometry: Geometry, bounds: Bounds) -> Result<Self, ConfigError> {
        geometry.validate()?;
        bounds.validate(&geometry)?;
        Ok(Self {
            geometry,
            x_range: bounds.center_x_range(&geometry),
            y_range: bounds.center_y_range(&geometry),
        })
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Drop one needle
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Needle {
        let x = rng.gen_range(self.x_range.0..=self.x_range.1);
        let y = rng.gen_range(self.y_range.0..=self.y_range.1);
        let theta = rng.gen_range(0.0..PI);
        Needle {
            x,
            y,
            theta,
            crosses: crosses_line(y, theta, &self.geometry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::FRAC_PI_2;

    fn unit() -> Geometry {
        Geometry::new(1.0, 1.0).unwrap()
    }

    #[test]
    fn test_distance_to_line() {
        assert_eq!(distance_to_line(0.0, 1.0), 0.0);
        assert_eq!(distance_to_line(0.25, 1.0), 0.25);
        assert_eq!(distance_to_line(0.75, 1.0), 0.25);
        assert_eq!(distance_to_line(2.5, 1.0), 0.5);
        // Negative heights measure to the line below, not toward zero
        assert_eq!(distance_to_line(-0.25, 1.0), 0.25);
        assert_eq!(distance_to_line(-1.75, 1.0), 0.25);
    }

    #[test]
    fn test_flat_needle_off_line_never_crosses() {
        let g = unit();
        for y in [0.1, 0.3, 0.5, -0.4, 2.9] {
            assert!(!crosses_line(y, 0.0, &g), "y = {}", y);
        }
    }

    #[test]
    fn test_tangent_needle_counts_as_crossing() {
        // Vertical unit needle centered midway between lines just touches both
        assert!(crosses_line(2.5, FRAC_PI_2, &unit()));
        assert!(crosses_line(-0.5, FRAC_PI_2, &unit()));
    }

    #[test]
    fn test_center_on_line_always_crosses() {
        let g = unit();
        assert!(crosses_line(1.0, 0.0, &g));
        assert!(crosses_line(-2.0, 1.0, &g));
    }

    #[test]
    fn test_short_needle_misses_midpoint() {
        let g = Geometry::new(0.5, 1.0).unwrap();
        assert!(!crosses_line(0.5, FRAC_PI_2, &g));
        assert!(crosses_line(0.25, FRAC_PI_2, &g));
        assert!(!crosses_line(0.26, FRAC_PI_2, &g));
    }

    #[test]
    fn test_sampler_rejects_long_needle() {
        let err = Sampler::new(
            Geometry {
                needle_length: 2.0,
                line_spacing: 1.0,
            },
            Bounds::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NeedleTooLong { .. }));
    }

    #[test]
    fn test_samples_stay_in_padded_region() {
        let sampler = Sampler::new(unit(), Bounds::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let n = sampler.sample(&mut rng);
            assert!((-2.5..=2.5).contains(&n.x));
            assert!((-2.5..=2.5).contains(&n.y));
            assert!((0.0..PI).contains(&n.theta));
            assert_eq!(n.crosses, crosses_line(n.y, n.theta, sampler.geometry()));

            let ((x0, y0), (x1, y1)) = n.endpoints(1.0);
            for v in [x0, y0, x1, y1] {
                assert!((-3.0..=3.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_endpoints() {
        let n = Needle {
            x: 1.0,
            y: 1.0,
            theta: 0.0,
            crosses: true,
        };
        assert_eq!(n.endpoints(1.0), ((0.5, 1.0), (1.5, 1.0)));
    }
}
