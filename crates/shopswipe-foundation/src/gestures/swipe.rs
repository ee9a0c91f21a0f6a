//! Swipe classification for the product card stack.

use shopswipe_animation::ExitDirection;

use crate::gesture_constants::{SWIPE_DISTANCE_THRESHOLD, SWIPE_VELOCITY_THRESHOLD};

/// Decision the user made about the active product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeOutcome {
    /// Swiped left.
    Pass,
    /// Swiped right.
    Like,
    /// Flicked up.
    AddToCart,
}

impl SwipeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Like => "like",
            Self::AddToCart => "add-to-cart",
        }
    }

    /// Direction the card leaves the stack in for this outcome.
    pub fn exit_direction(&self) -> ExitDirection {
        match self {
            Self::Pass => ExitDirection::Left,
            Self::Like => ExitDirection::Right,
            Self::AddToCart => ExitDirection::Up,
        }
    }
}

/// Summary of a completed drag on the active card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragGesture {
    /// Pointer travel along x between press and release. Negative is left.
    pub horizontal_offset: f32,
    /// Pointer velocity along y at release, per second. Negative is up.
    pub vertical_velocity: f32,
}

impl DragGesture {
    pub const fn new(horizontal_offset: f32, vertical_velocity: f32) -> Self {
        Self {
            horizontal_offset,
            vertical_velocity,
        }
    }
}

/// Thresholds used to classify a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub distance_threshold: f32,
    pub velocity_threshold: f32,
}

impl GestureConfig {
    pub fn with_distance_threshold(mut self, threshold: f32) -> Self {
        self.distance_threshold = threshold;
        self
    }

    pub fn with_velocity_threshold(mut self, threshold: f32) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    /// Classify a completed drag.
    ///
    /// Horizontal thresholds are checked first, so a drag that is both far
    /// enough sideways and fast enough upwards is a pass or a like, never an
    /// add-to-cart. `None` means the card springs back to rest.
    pub fn classify(&self, gesture: &DragGesture) -> Option<SwipeOutcome> {
        let offset = gesture.horizontal_offset;
        if offset < -self.distance_threshold {
            Some(SwipeOutcome::Pass)
        } else if offset > self.distance_threshold {
            Some(SwipeOutcome::Like)
        } else if gesture.vertical_velocity < -self.velocity_threshold {
            Some(SwipeOutcome::AddToCart)
        } else {
            None
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            distance_threshold: SWIPE_DISTANCE_THRESHOLD,
            velocity_threshold: SWIPE_VELOCITY_THRESHOLD,
        }
    }
}

/// Classify a completed drag with the default thresholds.
pub fn classify(gesture: &DragGesture) -> Option<SwipeOutcome> {
    GestureConfig::default().classify(gesture)
}
