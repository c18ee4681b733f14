//! Primitive shapes - Circle, Rectangle, Arc, Triangle, Trapezoid, Arrow
//!
//! These are the basic building blocks of the demos. Each one is a
//! direct function of its bounding rectangle.

use super::geometry::{Point, Rect};
use super::path::Path;
use super::traits::{InsettableShape, Shape};

/// A circle filling the largest centered square of the rectangle
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circle {
    pub inset_amount: f64,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Shape for Circle {
    fn path(&self, rect: Rect) -> Path {
        let side = rect.width.min(rect.height);
        let square = Rect::new(
            rect.mid_x() - side / 2.0,
            rect.mid_y() - side / 2.0,
            side,
            side,
        )
        .inset(self.inset_amount);

        let mut path = Path::new();
        path.add_ellipse(square);
        path
    }

    fn name(&self) -> &str {
        "Circle"
    }
}

impl InsettableShape for Circle {
    fn inset(&self, amount: f64) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
        }
    }
}

/// The bounding rectangle itself
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub inset_amount: f64,
}

impl Rectangle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Shape for Rectangle {
    fn path(&self, rect: Rect) -> Path {
        let mut path = Path::new();
        path.add_rect(rect.inset(self.inset_amount));
        path
    }

    fn name(&self) -> &str {
        "Rectangle"
    }
}

impl InsettableShape for Rectangle {
    fn inset(&self, amount: f64) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
        }
    }
}

/// A circular arc centered in the rectangle
///
/// Angles are in degrees with 0° pointing straight up. `clockwise`
/// refers to what you see on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
    pub inset_amount: f64,
}

impl Arc {
    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise: true,
            inset_amount: 0.0,
        }
    }

    pub fn counter_clockwise(mut self) -> Self {
        self.clockwise = false;
        self
    }

    /// Signed sweep in degrees; positive runs clockwise on screen
    fn sweep_degrees(&self) -> f64 {
        let raw = self.end_angle - self.start_angle;
        if raw.abs() >= 360.0 {
            return if self.clockwise { 360.0 } else { -360.0 };
        }
        if self.clockwise {
            raw.rem_euclid(360.0)
        } else {
            -(-raw).rem_euclid(360.0)
        }
    }
}

impl Shape for Arc {
    fn path(&self, rect: Rect) -> Path {
        // Shift so that 0° is twelve o'clock rather than three o'clock
        let start = (self.start_angle - 90.0).to_radians();
        let sweep = self.sweep_degrees().to_radians();
        let radius = (rect.width / 2.0 - self.inset_amount).max(0.0);

        let mut path = Path::new();
        path.add_arc(rect.center(), radius, start, sweep);
        path
    }

    fn name(&self) -> &str {
        "Arc"
    }
}

impl InsettableShape for Arc {
    fn inset(&self, amount: f64) -> Self {
        let mut arc = self.clone();
        arc.inset_amount += amount;
        arc
    }
}

/// An isosceles triangle pointing up
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangle;

impl Shape for Triangle {
    fn path(&self, rect: Rect) -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(rect.mid_x(), rect.min_y()));
        path.line_to(Point::new(rect.max_x(), rect.max_y()));
        path.line_to(Point::new(rect.min_x(), rect.max_y()));
        path.close();
        path
    }

    fn name(&self) -> &str {
        "Triangle"
    }
}

/// A trapezoid whose top edge is pulled in by `inset_amount` on each side
#[derive(Clone, Debug, PartialEq)]
pub struct Trapezoid {
    pub inset_amount: f64,
}

impl Trapezoid {
    pub fn new(inset_amount: f64) -> Self {
        Self { inset_amount }
    }
}

impl Shape for Trapezoid {
    fn path(&self, rect: Rect) -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(rect.min_x(), rect.max_y()));
        path.line_to(Point::new(rect.min_x() + self.inset_amount, rect.min_y()));
        path.line_to(Point::new(rect.max_x() - self.inset_amount, rect.min_y()));
        path.line_to(Point::new(rect.max_x(), rect.max_y()));
        path.close();
        path
    }

    fn name(&self) -> &str {
        "Trapezoid"
    }
}

/// An upward arrow: a triangular head over a rectangular shaft
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    /// Fraction of the height taken by the head (0 to 1)
    pub head_fraction: f64,
    /// Shaft width as a fraction of the rectangle width (0 to 1)
    pub shaft_width: f64,
}

impl Default for Arrow {
    fn default() -> Self {
        Self {
            head_fraction: 0.4,
            shaft_width: 0.3,
        }
    }
}

impl Arrow {
    pub fn new(head_fraction: f64, shaft_width: f64) -> Self {
        Self {
            head_fraction,
            shaft_width,
        }
    }
}

impl Shape for Arrow {
    fn path(&self, rect: Rect) -> Path {
        let head_bottom = rect.min_y() + rect.height * self.head_fraction.clamp(0.0, 1.0);
        let half_shaft = rect.width * self.shaft_width.clamp(0.0, 1.0) / 2.0;

        let mut path = Path::new();
        path.move_to(Point::new(rect.mid_x(), rect.min_y()));
        path.line_to(Point::new(rect.max_x(), head_bottom));
        path.line_to(Point::new(rect.mid_x() + half_shaft, head_bottom));
        path.line_to(Point::new(rect.mid_x() + half_shaft, rect.max_y()));
        path.line_to(Point::new(rect.mid_x() - half_shaft, rect.max_y()));
        path.line_to(Point::new(rect.mid_x() - half_shaft, head_bottom));
        path.line_to(Point::new(rect.min_x(), head_bottom));
        path.close();
        path
    }

    fn name(&self) -> &str {
        "Arrow"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_to(p: &Point, x: f64, y: f64) -> bool {
        (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6
    }

    #[test]
    fn test_arc_starts_at_top() {
        let rect = Rect::from_size(100.0, 100.0);
        let path = Arc::new(0.0, 90.0).path(rect);
        let arc = &path.subpaths()[0];

        assert!(close_to(arc.first().unwrap(), 50.0, 0.0));
        assert!(close_to(arc.last().unwrap(), 100.0, 50.0));
    }

    #[test]
    fn test_arc_counter_clockwise_takes_long_way() {
        let rect = Rect::from_size(100.0, 100.0);
        let clockwise = Arc::new(0.0, 90.0).path(rect);
        let counter = Arc::new(0.0, 90.0).counter_clockwise().path(rect);

        let quarter = std::f64::consts::PI * 50.0 / 2.0;
        assert!((clockwise.length() - quarter).abs() < 0.5);
        assert!((counter.length() - 3.0 * quarter).abs() < 1.0);
        assert!(close_to(counter.subpaths()[0].last().unwrap(), 100.0, 50.0));
    }

    #[test]
    fn test_arc_full_turn() {
        let arc = Arc::new(0.0, 360.0);
        assert_eq!(arc.sweep_degrees(), 360.0);
        assert_eq!(arc.clone().counter_clockwise().sweep_degrees(), -360.0);
    }

    #[test]
    fn test_arc_inset_accumulates() {
        let arc = Arc::new(-90.0, 90.0).inset(5.0).inset(5.0);
        assert_eq!(arc.inset_amount, 10.0);

        let path = arc.path(Rect::from_size(100.0, 100.0));
        let first = path.subpaths()[0].first().unwrap();
        // Starts at nine o'clock with radius 40
        assert!(close_to(first, 10.0, 50.0));
    }

    #[test]
    fn test_triangle() {
        let path = Triangle.path(Rect::from_size(100.0, 80.0));
        let tri = &path.subpaths()[0];

        assert!(tri.is_closed());
        assert_eq!(tri.len(), 3);
        assert!(close_to(&tri.points()[0], 50.0, 0.0));
        assert!(close_to(&tri.points()[1], 100.0, 80.0));
        assert!(close_to(&tri.points()[2], 0.0, 80.0));
    }

    #[test]
    fn test_trapezoid() {
        let path = Trapezoid::new(20.0).path(Rect::from_size(100.0, 50.0));
        let points = path.subpaths()[0].points();

        assert_eq!(points.len(), 4);
        assert!(close_to(&points[1], 20.0, 0.0));
        assert!(close_to(&points[2], 80.0, 0.0));
    }

    #[test]
    fn test_arrow_outline() {
        let path = Arrow::new(0.5, 0.2).path(Rect::from_size(100.0, 100.0));
        let outline = &path.subpaths()[0];

        assert!(outline.is_closed());
        assert_eq!(outline.len(), 7);
        assert!(close_to(&outline.points()[0], 50.0, 0.0));
        assert!(close_to(&outline.points()[2], 60.0, 50.0));
        assert!(close_to(&outline.points()[4], 40.0, 100.0));
    }

    #[test]
    fn test_circle_fits_short_side() {
        let path = Circle::new().inset(10.0).path(Rect::from_size(200.0, 100.0));
        for p in path.subpaths()[0].points() {
            let r = ((p.x - 100.0).powi(2) + (p.y - 50.0).powi(2)).sqrt();
            assert!((r - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rectangle_inset() {
        let path = Rectangle::new().inset(10.0).path(Rect::from_size(100.0, 60.0));
        assert!((path.length() - 2.0 * (80.0 + 40.0)).abs() < 1e-9);
    }
}
