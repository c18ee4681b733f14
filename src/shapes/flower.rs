//! Flower - sixteen elliptical petals rotated around the center

use std::f64::consts::{PI, TAU};

use nalgebra::Isometry2;

use super::geometry::Rect;
use super::path::Path;
use super::traits::Shape;

/// Angle between neighbouring petals
const PETAL_STEP: f64 = PI / 8.0;

/// A flower made of overlapping ellipses
///
/// Each petal is the ellipse inscribed in
/// `(petal_offset, 0, petal_width, width / 2)`, rotated about the origin
/// and then moved to the center of the drawing area.
#[derive(Clone, Debug, PartialEq)]
pub struct Flower {
    /// How far each petal sits from the center
    pub petal_offset: f64,
    /// How wide each petal is
    pub petal_width: f64,
}

impl Default for Flower {
    fn default() -> Self {
        Self {
            petal_offset: -20.0,
            petal_width: 100.0,
        }
    }
}

impl Flower {
    pub fn new(petal_offset: f64, petal_width: f64) -> Self {
        Self {
            petal_offset,
            petal_width,
        }
    }

    /// Rotation angles of every petal, starting at zero
    fn petal_angles() -> impl Iterator<Item = f64> {
        let count = (TAU / PETAL_STEP).round() as usize;
        (0..count).map(|i| i as f64 * PETAL_STEP)
    }
}

impl Shape for Flower {
    fn path(&self, rect: Rect) -> Path {
        let mut petal = Path::new();
        petal.add_ellipse(Rect::new(
            self.petal_offset,
            0.0,
            self.petal_width,
            rect.width / 2.0,
        ));

        let mut path = Path::new();
        for angle in Self::petal_angles() {
            // Rotate first, then translate to the center
            let position = Isometry2::new(rect.center().coords, angle);
            path.add_path(petal.transformed(&position));
        }
        path
    }

    fn name(&self) -> &str {
        "Flower"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_petals() {
        let path = Flower::default().path(Rect::from_size(200.0, 200.0));
        assert_eq!(path.subpaths().len(), 16);
        assert!(path.subpaths().iter().all(|p| p.is_closed()));
    }

    #[test]
    fn test_first_petal_is_translated_only() {
        let flower = Flower::new(0.0, 20.0);
        let path = flower.path(Rect::from_size(200.0, 200.0));

        // Unrotated petal spans x in [0, 20] and y in [0, 100] before moving
        for p in path.subpaths()[0].points() {
            assert!(p.x >= 100.0 - 1e-9 && p.x <= 120.0 + 1e-9);
            assert!(p.y >= 100.0 - 1e-9 && p.y <= 200.0 + 1e-9);
        }
    }

    #[test]
    fn test_petals_are_rotations_of_each_other() {
        let path = Flower::new(10.0, 40.0).path(Rect::from_size(100.0, 100.0));
        let center = Rect::from_size(100.0, 100.0).center();

        let first = path.subpaths()[0].points()[0];
        let ninth = path.subpaths()[8].points()[0];

        // Half a turn apart: mirrored through the center
        assert!((first.x + ninth.x - 2.0 * center.x).abs() < 1e-9);
        assert!((first.y + ninth.y - 2.0 * center.y).abs() < 1e-9);
    }
}
