//! Tween specs and easing curves.
//!
//! Exit transitions are short fixed-duration tweens; the renderer samples
//! them by elapsed time rather than running its own physics.

use std::time::Duration;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves supported by card transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Slow start, cubic curve.
    EaseIn,
    /// Slow finish, cubic curve. Used for card exits.
    EaseOut,
    /// Slow start and finish.
    EaseInOut,
}

impl Easing {
    /// Apply the easing curve to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier((0.42, 0.0), (1.0, 1.0), fraction),
            Easing::EaseOut => cubic_bezier((0.0, 0.0), (0.58, 1.0), fraction),
            Easing::EaseInOut => cubic_bezier((0.42, 0.0), (0.58, 1.0), fraction),
        }
    }
}

/// Evaluates a CSS-style cubic bezier with fixed end points (0,0) and (1,1).
///
/// Solves for the curve parameter by bisection; x(t) is monotonic for every
/// control point pair used above.
fn cubic_bezier(p1: (f32, f32), p2: (f32, f32), fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let component = |a: f32, b: f32, t: f32| {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * a + 3.0 * inv * t * t * b + t * t * t
    };

    let (mut low, mut high) = (0.0f32, 1.0f32);
    let mut t = fraction;
    for _ in 0..24 {
        let x = component(p1.0, p2.0, t);
        if (x - fraction).abs() < 1e-6 {
            break;
        }
        if x > fraction {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }

    component(p1.1, p2.1, t)
}

/// Tween specification: duration, easing and an optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing curve applied to linear progress.
    pub easing: Easing,
    /// Delay before the tween starts, in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the tween starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Total time from start request until the tween reaches its target.
    pub fn total_duration(&self) -> Duration {
        Duration::from_millis(self.delay_millis + self.duration_millis)
    }

    /// Eased progress in [0, 1] after `elapsed` time.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let delay = Duration::from_millis(self.delay_millis);
        let Some(running) = elapsed.checked_sub(delay) else {
            return 0.0;
        };
        if self.duration_millis == 0 {
            return 1.0;
        }
        let linear = running.as_secs_f32() / Duration::from_millis(self.duration_millis).as_secs_f32();
        self.easing.transform(linear.clamp(0.0, 1.0))
    }

    /// Whether the tween has finished after `elapsed` time.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(crate::motion::EXIT_DURATION_MS, Easing::EaseOut)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
