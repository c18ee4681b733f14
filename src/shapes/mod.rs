//! Shapes module - parametric path builders
//!
//! This module provides:
//! - `Shape` and `InsettableShape` traits
//! - Primitive shapes: Circle, Rectangle, Arc, Triangle, Trapezoid, Arrow
//! - Flower, CheckerBoard and the Spirograph curve sampler
//! - `Path` / `Polyline` for the geometry they produce

mod checkerboard;
mod error;
mod flower;
mod geometry;
mod path;
mod primitives;
mod spirograph;
mod traits;

pub use checkerboard::CheckerBoard;
pub use error::ShapeError;
pub use flower::Flower;
pub use geometry::{Point, Rect};
pub use path::{Path, Polyline};
pub use primitives::{Arc, Arrow, Circle, Rectangle, Trapezoid, Triangle};
pub use spirograph::{gcd, sample_curve, CurveParameters, Spirograph, MAX_SAMPLES, THETA_STEP};
pub use traits::{BoxedShape, InsettableShape, Shape};
