//! Render module - UI components for shape previews
//!
//! This module provides:
//! - Canvas widget that strokes and fills shape paths
//! - Color cycling palettes for concentric rings

mod canvas;
mod palette;

pub use canvas::{Canvas, CanvasSettings, Layer, Paint};
pub use palette::{
    color_cycle_layers, gradient_brightness, ring_color, ring_hue, GradientDirection,
    DEFAULT_STEPS,
};
