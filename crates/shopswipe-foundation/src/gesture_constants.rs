//! Shared gesture constants for card swiping.
//!
//! Values are in logical pixels and logical pixels per second.

/// Horizontal drag distance a card must exceed to count as a pass or a like.
///
/// The comparison is strict: an offset of exactly 100 springs back.
pub const SWIPE_DISTANCE_THRESHOLD: f32 = 100.0;

/// Upward release velocity a card must exceed to be added to the cart.
///
/// Upward is negative on screen, so a gesture qualifies when its vertical
/// velocity is below `-SWIPE_VELOCITY_THRESHOLD`.
pub const SWIPE_VELOCITY_THRESHOLD: f32 = 100.0;

/// Fraction of pointer travel the card follows past its anchored bounds.
pub const DRAG_ELASTICITY: f32 = 0.8;

/// Window of recent pointer samples used to estimate release velocity.
pub const VELOCITY_WINDOW_MS: u64 = 100;
