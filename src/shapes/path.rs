//! Path type - sequences of connected points
//!
//! A `Polyline` is one run of connected points. A `Path` is an ordered
//! list of polylines (subpaths), built with the familiar
//! `move_to` / `line_to` / `close` calls. Curves are sampled into line
//! segments as they are added; nothing downstream needs to know about
//! arcs or ellipses.

use std::f64::consts::TAU;

use nalgebra::Isometry2;

use super::geometry::{Point, Rect};

/// Segments used to approximate a full ellipse
const ELLIPSE_SEGMENTS: usize = 64;

/// Segments used per full turn when sampling arcs
const ARC_SEGMENTS_PER_TURN: f64 = 128.0;

/// An ordered run of points joined by straight segments
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    /// Whether the last point connects back to the first
    closed: bool,
}

impl Polyline {
    /// Create an open polyline
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, closed: false }
    }

    /// Create a closed polyline
    pub fn closed(points: Vec<Point>) -> Self {
        Self { points, closed: true }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Total length of all segments, including the closing one
    pub fn length(&self) -> f64 {
        let open: f64 = self
            .points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum();

        match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) => open + nalgebra::distance(last, first),
            _ => open,
        }
    }

    fn transformed(&self, transform: &Isometry2<f64>) -> Self {
        Self {
            points: self.points.iter().map(|p| transform * p).collect(),
            closed: self.closed,
        }
    }
}

/// A drawable path made of one or more subpaths
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<Polyline>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at `point`
    pub fn move_to(&mut self, point: Point) {
        self.subpaths.push(Polyline::new(vec![point]));
    }

    /// Append a straight segment to the current subpath
    ///
    /// Without an open subpath this behaves like `move_to`.
    pub fn line_to(&mut self, point: Point) {
        match self.subpaths.last_mut() {
            Some(current) if !current.is_closed() => current.push(point),
            _ => self.move_to(point),
        }
    }

    /// Close the current subpath
    pub fn close(&mut self) {
        if let Some(current) = self.subpaths.last_mut() {
            current.close();
        }
    }

    /// Add a closed polygon through `points`
    pub fn add_polygon(&mut self, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        self.subpaths.push(Polyline::closed(points.to_vec()));
    }

    /// Add a closed rectangle, traced clockwise from the top-left corner
    pub fn add_rect(&mut self, rect: Rect) {
        self.add_polygon(&[
            Point::new(rect.min_x(), rect.min_y()),
            Point::new(rect.max_x(), rect.min_y()),
            Point::new(rect.max_x(), rect.max_y()),
            Point::new(rect.min_x(), rect.max_y()),
        ]);
    }

    /// Add the ellipse inscribed in `rect`
    pub fn add_ellipse(&mut self, rect: Rect) {
        let center = rect.center();
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;

        let points: Vec<Point> = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = i as f64 / ELLIPSE_SEGMENTS as f64 * TAU;
                Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
            })
            .collect();

        self.subpaths.push(Polyline::closed(points));
    }

    /// Add a circular arc as a new subpath
    ///
    /// Angles are in radians, measured from the positive X axis. Because Y
    /// points down, a positive `sweep` runs visually clockwise.
    pub fn add_arc(&mut self, center: Point, radius: f64, start: f64, sweep: f64) {
        let segments = ((sweep.abs() / TAU) * ARC_SEGMENTS_PER_TURN).ceil().max(1.0) as usize;

        let points: Vec<Point> = (0..=segments)
            .map(|i| {
                let angle = start + sweep * (i as f64 / segments as f64);
                Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect();

        self.subpaths.push(Polyline::new(points));
    }

    /// Append a polyline as its own subpath
    pub fn add_polyline(&mut self, polyline: Polyline) {
        if !polyline.is_empty() {
            self.subpaths.push(polyline);
        }
    }

    /// Append every subpath of `other`
    pub fn add_path(&mut self, other: Path) {
        self.subpaths.extend(other.subpaths);
    }

    /// Return a copy with every point mapped through `transform`
    pub fn transformed(&self, transform: &Isometry2<f64>) -> Self {
        Self {
            subpaths: self.subpaths.iter().map(|s| s.transformed(transform)).collect(),
        }
    }

    pub fn subpaths(&self) -> &[Polyline] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Number of points across all subpaths
    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(Polyline::len).sum()
    }

    /// Combined length of all subpaths
    pub fn length(&self) -> f64 {
        self.subpaths.iter().map(Polyline::length).sum()
    }
}

impl From<Polyline> for Path {
    fn from(polyline: Polyline) -> Self {
        let mut path = Path::new();
        path.add_polyline(polyline);
        path
    }
}
