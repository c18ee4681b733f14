//! drawing-rs - parametric shape playground
//!
//! Small shapes (arcs, flowers, checkerboards, spirographs, arrows) built
//! as pure path generators, previewed live with sliders bound to their
//! parameters.

pub mod animation;
pub mod app;
pub mod render;
pub mod settings;
pub mod shapes;
