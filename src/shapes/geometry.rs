//! Geometry primitives shared by every shape
//!
//! Coordinates are screen-like: X grows to the right, Y grows downward,
//! and the origin is the top-left corner of the drawing area.

use nalgebra::Point2;

/// A 2D point in drawing space
pub type Point = Point2<f64>;

/// An axis-aligned rectangle
///
/// Mirrors the handful of accessors shapes need (`min_x`, `mid_y`, ...),
/// so path builders read like the geometry they describe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle anchored at the origin
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Shrink the rectangle by `amount` on every side
    ///
    /// Width and height never go negative; a fully collapsed rectangle
    /// keeps its center.
    pub fn inset(&self, amount: f64) -> Self {
        let width = (self.width - 2.0 * amount).max(0.0);
        let height = (self.height - 2.0 * amount).max(0.0);
        Self {
            x: self.mid_x() - width / 2.0,
            y: self.mid_y() - height / 2.0,
            width,
            height,
        }
    }

    /// Largest centered rectangle with `aspect` (width / height) that fits
    pub fn aspect_fit(&self, aspect: f64) -> Self {
        if aspect <= 0.0 || self.height <= 0.0 {
            return *self;
        }
        let (width, height) = if self.width / self.height > aspect {
            (self.height * aspect, self.height)
        } else {
            (self.width, self.width / aspect)
        };
        Self::new(self.mid_x() - width / 2.0, self.mid_y() - height / 2.0, width, height)
    }
}
