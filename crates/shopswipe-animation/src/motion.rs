//! Declarative motion table for the active product card.
//!
//! A card has three motion states: `initial` when it mounts, `animate` while
//! it rests, and an optional `exit` transition chosen by the direction the
//! card is leaving in. The renderer owns the actual animation engine; this
//! module only describes where the card should go and how fast.

use std::time::Duration;

use crate::animation::{AnimationSpec, Easing, Lerp};

/// Distance in logical pixels a dismissed card travels.
pub const EXIT_DISTANCE: f32 = 300.0;

/// Duration of the exit tween in milliseconds.
pub const EXIT_DURATION_MS: u64 = 200;

/// Scale applied while the card is being dragged.
pub const DRAG_SCALE: f32 = 1.03;

/// Degrees of rotation per logical pixel of horizontal drag.
pub const DRAG_ROTATION_FACTOR: f32 = 0.03;

/// Direction the active card leaves the stack in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitDirection {
    Left,
    Right,
    Up,
}

impl ExitDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
        }
    }
}

/// Visual transform of a card relative to its rest position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub rotation_degrees: f32,
}

impl CardTransform {
    /// Identity transform: in place, fully opaque.
    pub const REST: CardTransform = CardTransform {
        offset_x: 0.0,
        offset_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotation_degrees: 0.0,
    };

    /// Off-screen, faded-out target for a dismissed card.
    pub fn exit_target(direction: ExitDirection) -> Self {
        let (offset_x, offset_y) = match direction {
            ExitDirection::Left => (-EXIT_DISTANCE, 0.0),
            ExitDirection::Right => (EXIT_DISTANCE, 0.0),
            ExitDirection::Up => (0.0, -EXIT_DISTANCE),
        };
        Self {
            offset_x,
            offset_y,
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::REST
    }
}

impl Lerp for CardTransform {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            offset_x: self.offset_x.lerp(&target.offset_x, fraction),
            offset_y: self.offset_y.lerp(&target.offset_y, fraction),
            opacity: self.opacity.lerp(&target.opacity, fraction),
            scale: self.scale.lerp(&target.scale, fraction),
            rotation_degrees: self.rotation_degrees.lerp(&target.rotation_degrees, fraction),
        }
    }
}

/// Exit transition: target transform plus timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitTransition {
    pub direction: ExitDirection,
    pub target: CardTransform,
    pub spec: AnimationSpec,
}

/// Motion description handed to the renderer for the active card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMotion {
    pub initial: CardTransform,
    pub animate: CardTransform,
    pub exit: Option<ExitTransition>,
}

impl CardMotion {
    /// Card in place with no exit scheduled.
    pub const REST: CardMotion = CardMotion {
        initial: CardTransform::REST,
        animate: CardTransform::REST,
        exit: None,
    };

    pub fn is_rest(&self) -> bool {
        self.exit.is_none() && self.initial.is_rest() && self.animate.is_rest()
    }

    /// Transform of the card `elapsed` after its exit started.
    ///
    /// Without an exit transition the card stays at its `animate` state.
    pub fn sample_exit(&self, elapsed: Duration) -> CardTransform {
        match &self.exit {
            Some(exit) => self
                .animate
                .lerp(&exit.target, exit.spec.progress(elapsed)),
            None => self.animate,
        }
    }

    /// Whether the exit transition has finished after `elapsed`.
    pub fn exit_finished(&self, elapsed: Duration) -> bool {
        self.exit
            .as_ref()
            .map_or(true, |exit| exit.spec.is_finished(elapsed))
    }
}

impl Default for CardMotion {
    fn default() -> Self {
        Self::REST
    }
}

/// Maps an exit direction to the card's motion description.
///
/// `None` yields the rest state, used before any gesture and for a card that
/// stays in place.
pub fn exit_motion(direction: Option<ExitDirection>) -> CardMotion {
    match direction {
        None => CardMotion::REST,
        Some(direction) => CardMotion {
            exit: Some(ExitTransition {
                direction,
                target: CardTransform::exit_target(direction),
                spec: AnimationSpec::tween(EXIT_DURATION_MS, Easing::EaseOut),
            }),
            ..CardMotion::REST
        },
    }
}

/// Transform of a card while the pointer is dragging it.
///
/// The card grows slightly and tilts with its horizontal offset; it never
/// moves vertically.
pub fn drag_feedback(visual_offset_x: f32) -> CardTransform {
    CardTransform {
        offset_x: visual_offset_x,
        scale: DRAG_SCALE,
        rotation_degrees: visual_offset_x * DRAG_ROTATION_FACTOR,
        ..CardTransform::REST
    }
}
