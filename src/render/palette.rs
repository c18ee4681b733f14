//! Color cycling - hue ramps across concentric rings
//!
//! A base shape is inset once per step. Each ring gets its own hue,
//! offset by `amount`, and is stroked with a gradient from full
//! brightness to half brightness.

use eframe::egui::{ecolor::Hsva, Color32};
use serde::{Deserialize, Serialize};

use super::canvas::{Layer, Paint};
use crate::shapes::{InsettableShape, Rect, Shape};

/// Default number of rings
pub const DEFAULT_STEPS: usize = 100;

/// Brightness at the far end of each ring's gradient
const GRADIENT_END_BRIGHTNESS: f32 = 0.5;

/// Which way a ring's gradient runs
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum GradientDirection {
    TopToBottom,
    LeftToRight,
}

impl GradientDirection {
    pub fn all() -> &'static [GradientDirection] {
        &[GradientDirection::TopToBottom, GradientDirection::LeftToRight]
    }

    pub fn name(&self) -> &'static str {
        match self {
            GradientDirection::TopToBottom => "Top to bottom",
            GradientDirection::LeftToRight => "Left to right",
        }
    }

    /// Position of (x, y) along the gradient within `rect`, 0 to 1
    pub fn fraction(&self, rect: Rect, x: f64, y: f64) -> f64 {
        let (offset, span) = match self {
            GradientDirection::TopToBottom => (y - rect.min_y(), rect.height),
            GradientDirection::LeftToRight => (x - rect.min_x(), rect.width),
        };
        if span <= 0.0 {
            return 0.0;
        }
        (offset / span).clamp(0.0, 1.0)
    }
}

/// Hue of ring `value` out of `steps`, shifted by `amount`
///
/// Wraps once: a hue above 1 has 1 subtracted.
pub fn ring_hue(value: usize, steps: usize, amount: f64) -> f64 {
    let mut hue = value as f64 / steps.max(1) as f64 + amount;
    if hue > 1.0 {
        hue -= 1.0;
    }
    hue
}

/// Fully saturated color of `hue` at `brightness`
pub fn ring_color(hue: f64, brightness: f32) -> Color32 {
    Hsva::new(hue as f32, 1.0, brightness, 1.0).into()
}

/// Brightness at `fraction` of the way along a ring's gradient
pub fn gradient_brightness(fraction: f64) -> f32 {
    1.0 - (1.0 - GRADIENT_END_BRIGHTNESS) * fraction as f32
}

/// One gradient-stroked layer per ring, outermost first
pub fn color_cycle_layers<S: InsettableShape>(
    shape: &S,
    rect: Rect,
    steps: usize,
    amount: f64,
    direction: GradientDirection,
    line_width: f32,
) -> Vec<Layer> {
    (0..steps)
        .map(|value| Layer {
            path: Shape::path(&shape.inset(value as f64), rect),
            paint: Paint::Gradient {
                width: line_width,
                hue: ring_hue(value, steps, amount),
                direction,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Circle;

    #[test]
    fn test_ring_hue_wraps_once() {
        assert_eq!(ring_hue(0, 100, 0.0), 0.0);
        assert!((ring_hue(50, 100, 0.25) - 0.75).abs() < 1e-12);
        assert!((ring_hue(80, 100, 0.5) - 0.3).abs() < 1e-12);
        // Exactly 1 is left alone
        assert!((ring_hue(50, 100, 0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_gradient_brightness() {
        assert_eq!(gradient_brightness(0.0), 1.0);
        assert_eq!(gradient_brightness(1.0), 0.5);
    }

    #[test]
    fn test_gradient_fraction() {
        let rect = Rect::new(0.0, 100.0, 200.0, 100.0);
        let down = GradientDirection::TopToBottom;
        let across = GradientDirection::LeftToRight;

        assert_eq!(down.fraction(rect, 50.0, 150.0), 0.5);
        assert_eq!(across.fraction(rect, 50.0, 150.0), 0.25);
        assert_eq!(down.fraction(rect, 0.0, 500.0), 1.0);
    }

    #[test]
    fn test_ring_color_is_saturated() {
        let red = ring_color(0.0, 1.0);
        assert_eq!(red, Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_layers_per_ring() {
        let rect = Rect::from_size(300.0, 300.0);
        let layers = color_cycle_layers(
            &Circle::new(),
            rect,
            10,
            0.0,
            GradientDirection::TopToBottom,
            2.0,
        );

        assert_eq!(layers.len(), 10);
        assert!(layers[0].path.length() > layers[9].path.length());
    }
}
