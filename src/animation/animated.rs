//! Animated values
//!
//! An `Animated` value eases from where it currently is to a new target
//! over a fixed duration. Time is whatever clock the caller passes in
//! (egui's `input.time` in the app), in seconds.

use super::easing::Easing;

/// A number that tweens towards its target
#[derive(Clone, Debug)]
pub struct Animated {
    from: f64,
    to: f64,
    /// When the current tween started
    start: f64,
    /// Tween length in seconds
    pub duration: f64,
    pub easing: Easing,
}

impl Animated {
    /// Create a value resting at `value`
    pub fn new(value: f64, duration: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration,
            easing: Easing::default(),
        }
    }

    /// Set the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The value the tween is heading to
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Progress of the current tween, 0 to 1
    fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Sample the value at time `now`
    pub fn value(&self, now: f64) -> f64 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    /// Start easing towards `target` from wherever the value is now
    pub fn set_target(&mut self, target: f64, now: f64) {
        self.from = self.value(now);
        self.to = target;
        self.start = now;
    }

    /// Jump straight to `value` without animating
    pub fn set_immediate(&mut self, value: f64) {
        self.from = value;
        self.to = value;
    }

    /// Whether the tween is still running at `now`
    pub fn is_animating(&self, now: f64) -> bool {
        self.from != self.to && self.progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_value() {
        let value = Animated::new(5.0, 1.0);
        assert_eq!(value.value(0.0), 5.0);
        assert_eq!(value.value(100.0), 5.0);
        assert!(!value.is_animating(0.0));
    }

    #[test]
    fn test_linear_tween() {
        let mut value = Animated::new(0.0, 2.0).easing(Easing::Linear);
        value.set_target(10.0, 1.0);

        assert_eq!(value.value(1.0), 0.0);
        assert!((value.value(2.0) - 5.0).abs() < 1e-9);
        assert_eq!(value.value(3.0), 10.0);
        assert!(value.is_animating(2.0));
        assert!(!value.is_animating(3.0));
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut value = Animated::new(0.0, 1.0).easing(Easing::Linear);
        value.set_target(10.0, 0.0);
        value.set_target(0.0, 0.5);

        // Starts back from the halfway point
        assert!((value.value(0.5) - 5.0).abs() < 1e-9);
        assert!((value.value(1.0) - 2.5).abs() < 1e-9);
        assert_eq!(value.target(), 0.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut value = Animated::new(1.0, 0.0);
        value.set_target(4.0, 10.0);
        assert_eq!(value.value(10.0), 4.0);
        assert!(!value.is_animating(10.0));
    }

    #[test]
    fn test_set_immediate() {
        let mut value = Animated::new(1.0, 1.0);
        value.set_target(9.0, 0.0);
        value.set_immediate(3.0);
        assert_eq!(value.value(0.5), 3.0);
    }
}
