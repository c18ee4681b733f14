//! Spirograph - hypotrochoid / epitrochoid curve sampler
//!
//! A pen fixed at `arm_distance` from the center of a circle of radius
//! `outer_radius`, rolling along a circle of radius `inner_radius`,
//! traces a curve that repeats after `2π·outer_radius / gcd(inner, outer)`
//! radians.
//!
//! ## Parametric Equation
//! ```text
//! d = inner - outer
//! x = d·cos(θ) + arm·cos((d / outer)·θ)
//! y = d·sin(θ) - arm·sin((d / outer)·θ)
//! ```

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::error::ShapeError;
use super::geometry::{Point, Rect};
use super::path::{Path, Polyline};
use super::traits::Shape;

/// Angular distance between consecutive samples, in radians
pub const THETA_STEP: f64 = 0.01;

/// Absorbs rounding in `theta_max / THETA_STEP` so exact multiples of the
/// step keep their endpoint.
const STEP_EPSILON: f64 = 1e-9;

/// Longest curve a single run may sample
pub const MAX_SAMPLES: usize = 1_000_000;

/// Greatest common divisor by Euclid's algorithm
///
/// `gcd(a, 0) == a`, and `gcd(0, 0) == 0`.
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Inputs of one sampling run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParameters {
    pub inner_radius: u32,
    pub outer_radius: u32,
    pub arm_distance: u32,
    /// Fraction of one full period to trace, 0 to 1
    pub winding_fraction: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            inner_radius: 125,
            outer_radius: 75,
            arm_distance: 25,
            winding_fraction: 1.0,
        }
    }
}

impl CurveParameters {
    /// Reject inputs that would divide by zero, produce NaN points, or
    /// need more than `MAX_SAMPLES` points
    pub fn validate(&self) -> Result<(), ShapeError> {
        if gcd(self.inner_radius, self.outer_radius) == 0 {
            return Err(ShapeError::InvalidParameter {
                name: "inner_radius",
                reason: "radii must not both be zero",
            });
        }
        if self.outer_radius == 0 {
            return Err(ShapeError::InvalidParameter {
                name: "outer_radius",
                reason: "must be greater than zero",
            });
        }
        if !self.winding_fraction.is_finite() || !(0.0..=1.0).contains(&self.winding_fraction) {
            return Err(ShapeError::InvalidParameter {
                name: "winding_fraction",
                reason: "must be a number between 0 and 1",
            });
        }
        // Compare as reals so huge periods never reach the usize cast
        if self.theta_max() / THETA_STEP + STEP_EPSILON >= MAX_SAMPLES as f64 {
            return Err(ShapeError::InvalidParameter {
                name: "outer_radius",
                reason: "curve too long to sample",
            });
        }
        Ok(())
    }

    /// Length of one full period, in radians
    pub fn period(&self) -> f64 {
        let divisor = gcd(self.inner_radius, self.outer_radius);
        TAU * self.outer_radius as f64 / divisor as f64
    }

    /// Last sampled angle
    pub fn theta_max(&self) -> f64 {
        self.period().ceil() * self.winding_fraction
    }

    /// Number of points a sampling run produces
    pub fn sample_count(&self) -> usize {
        (self.theta_max() / THETA_STEP + STEP_EPSILON).floor() as usize + 1
    }

    /// Curve position at `theta`, relative to the curve's own center
    fn point_at(&self, theta: f64) -> Point {
        let difference = self.inner_radius as f64 - self.outer_radius as f64;
        let arm = self.arm_distance as f64;
        let arm_angle = (difference / self.outer_radius as f64) * theta;

        Point::new(
            difference * theta.cos() + arm * arm_angle.cos(),
            difference * theta.sin() - arm * arm_angle.sin(),
        )
    }

    /// Sample points of already validated parameters, offset by `center`
    fn trace(&self, center: Point) -> Polyline {
        let points = (0..self.sample_count())
            .map(|i| {
                let theta = i as f64 * THETA_STEP;
                center + self.point_at(theta).coords
            })
            .collect();

        Polyline::new(points)
    }
}

/// Sample a spirograph curve into a drawing area of `width` x `height`
///
/// Points are centered on the middle of the area. Parameters are checked
/// before any division happens.
pub fn sample_curve(
    params: &CurveParameters,
    width: f64,
    height: f64,
) -> Result<Polyline, ShapeError> {
    params.validate()?;
    Ok(params.trace(Rect::from_size(width, height).center()))
}

/// A validated spirograph curve
#[derive(Clone, Debug, PartialEq)]
pub struct Spirograph {
    params: CurveParameters,
}

impl Spirograph {
    pub fn new(params: CurveParameters) -> Result<Self, ShapeError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &CurveParameters {
        &self.params
    }
}

impl Shape for Spirograph {
    fn path(&self, rect: Rect) -> Path {
        Path::from(self.params.trace(rect.center()))
    }

    fn name(&self) -> &str {
        "Spirograph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(inner: u32, outer: u32, arm: u32, fraction: f64) -> CurveParameters {
        CurveParameters {
            inner_radius: inner,
            outer_radius: outer,
            arm_distance: arm,
            winding_fraction: fraction,
        }
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 0), 12);
        assert_eq!(gcd(0, 12), 12);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(125, 75), 25);
        assert_eq!(gcd(17, 5), 1);

        for (a, b) in [(48, 18), (100, 7), (81, 27), (5, 125)] {
            assert_eq!(gcd(a, b), gcd(b, a % b));
        }
    }

    #[test]
    fn test_zero_outer_radius_rejected() {
        let result = sample_curve(&params(100, 0, 25, 1.0), 300.0, 300.0);
        assert!(matches!(
            result,
            Err(ShapeError::InvalidParameter { name: "outer_radius", .. })
        ));
        assert!(matches!(
            Spirograph::new(params(0, 0, 0, 0.5)),
            Err(ShapeError::InvalidParameter { name: "inner_radius", .. })
        ));
    }

    #[test]
    fn test_overlong_curve_rejected() {
        let huge = params(u32::MAX - 1, u32::MAX, 25, 1.0);
        assert!(matches!(
            sample_curve(&huge, 300.0, 300.0),
            Err(ShapeError::InvalidParameter {
                name: "outer_radius",
                reason: "curve too long to sample"
            })
        ));

        // A short winding of the same curve still fits
        let partial = params(u32::MAX - 1, u32::MAX, 25, 1e-9);
        assert!(partial.validate().is_ok());
        assert!(partial.sample_count() <= MAX_SAMPLES);

        // Largest slider values stay well inside the limit
        assert!(params(1, 150, 150, 1.0).validate().is_ok());
    }

    #[test]
    fn test_bad_winding_fraction_rejected() {
        assert!(sample_curve(&params(100, 50, 25, f64::NAN), 10.0, 10.0).is_err());
        assert!(sample_curve(&params(100, 50, 25, -0.1), 10.0, 10.0).is_err());
        assert!(sample_curve(&params(100, 50, 25, 1.5), 10.0, 10.0).is_err());
    }

    #[test]
    fn test_zero_fraction_is_single_point() {
        let curve = sample_curve(&params(125, 75, 25, 0.0), 300.0, 300.0).unwrap();
        assert_eq!(curve.len(), 1);

        // theta = 0: (difference + arm, 0) from the center
        let p = curve.first().unwrap();
        assert!((p.x - (150.0 + 50.0 + 25.0)).abs() < 1e-9);
        assert!((p.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_count() {
        for p in [
            params(125, 75, 25, 1.0),
            params(125, 75, 25, 0.5),
            params(100, 30, 60, 0.37),
            params(0, 40, 10, 1.0),
        ] {
            let curve = sample_curve(&p, 400.0, 400.0).unwrap();
            let expected = (p.theta_max() / THETA_STEP + STEP_EPSILON).floor() as usize + 1;
            assert_eq!(curve.len(), expected);
        }

        // ceil(6π) = 19 radians, half of that is 9.5
        assert_eq!(params(125, 75, 25, 1.0).sample_count(), 1901);
        assert_eq!(params(125, 75, 25, 0.5).sample_count(), 951);
    }

    #[test]
    fn test_equal_radii_stay_on_arm_circle() {
        let curve = sample_curve(&params(80, 80, 30, 1.0), 200.0, 100.0).unwrap();
        for p in curve.points() {
            let r = ((p.x - 100.0).powi(2) + (p.y - 50.0).powi(2)).sqrt();
            assert!((r - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_full_winding_closes() {
        let p = params(125, 75, 25, 1.0);
        let curve = sample_curve(&p, 300.0, 300.0).unwrap();
        let first = *curve.first().unwrap();

        // The sample nearest one full period lands back on the start
        let period_index = (p.period() / THETA_STEP).round() as usize;
        let at_period = curve.points()[period_index];
        assert!(nalgebra::distance(&first, &at_period) < 1.0);

        // The tail past the period only retraces the first few samples
        let last = *curve.last().unwrap();
        let tail = (p.theta_max() - p.period()) / THETA_STEP;
        let retraced = curve.points()[tail.round() as usize];
        assert!(nalgebra::distance(&last, &retraced) < 1.0);
    }

    #[test]
    fn test_points_are_finite() {
        let curve = sample_curve(&params(1, 150, 150, 1.0), 500.0, 500.0).unwrap();
        assert!(curve.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_shape_matches_sampler() {
        let p = params(90, 40, 20, 0.25);
        let rect = Rect::from_size(320.0, 240.0);
        let shape = Spirograph::new(p).unwrap();
        let path = shape.path(rect);

        let curve = sample_curve(&p, rect.width, rect.height).unwrap();
        assert_eq!(path.subpaths()[0], curve);
        assert!(!curve.is_closed());
    }
}
