//! Animation module - eased tweens for animatable shape parameters
//!
//! This module provides:
//! - `Easing` curves
//! - `Animated` values that ease towards a target over time

mod animated;
mod easing;

pub use animated::Animated;
pub use easing::Easing;
