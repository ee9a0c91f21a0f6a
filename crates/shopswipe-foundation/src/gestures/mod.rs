pub mod drag;
pub mod swipe;

pub use drag::{DragConstraints, DragTracker};
pub use swipe::{classify, DragGesture, GestureConfig, SwipeOutcome};
