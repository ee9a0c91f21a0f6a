//! Pointer input and swipe gesture classification for ShopSwipe
//!
//! Turns raw pointer samples into a completed drag summary and classifies
//! that summary into a swipe outcome.

pub mod gesture_constants;
pub mod gestures;
pub mod input;

pub use gestures::*;
pub use input::*;

pub mod prelude {
    pub use crate::gestures::{classify, DragConstraints, DragGesture, DragTracker, GestureConfig, SwipeOutcome};
    pub use crate::input::{Point, PointerEvent, PointerEventKind};
}
