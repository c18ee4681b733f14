//! Shape traits
//!
//! A shape knows how to describe itself as a [`Path`] inside a bounding
//! rectangle. It does not know how it will be stroked or filled; the
//! canvas decides that.

use super::geometry::Rect;
use super::path::Path;

/// Something that produces a path given a bounding rectangle
///
/// Implementations are pure: the same rectangle always yields the same
/// path, so a shape can be rebuilt every frame while its parameters
/// animate.
pub trait Shape {
    /// Build the path that fills `rect`
    fn path(&self, rect: Rect) -> Path;

    /// Get the name of this shape (for UI display)
    fn name(&self) -> &str;
}

/// A shape that can shrink inward by a fixed amount
///
/// Insetting is what lets a stroke sit entirely inside the bounding
/// rectangle (a "stroke border"), and what draws concentric rings.
/// Repeated insets accumulate.
pub trait InsettableShape: Shape + Sized {
    fn inset(&self, amount: f64) -> Self;
}

/// A boxed shape for dynamic dispatch
pub type BoxedShape = Box<dyn Shape>;
