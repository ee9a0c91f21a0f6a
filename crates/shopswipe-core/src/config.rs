use shopswipe_foundation::gesture_constants::VELOCITY_WINDOW_MS;
use shopswipe_foundation::{DragConstraints, GestureConfig};
use web_time::Duration;

/// Time between classifying a swipe and committing it, long enough for the
/// exit tween to play.
pub const SETTLE_DELAY_MS: u64 = 200;

/// How long a confirmation toast stays visible.
pub const NOTIFICATION_DURATION_MS: u64 = 1000;

/// Timing and thresholds for a swipe session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub settle_delay: Duration,
    pub notification_duration: Duration,
    pub gesture: GestureConfig,
    pub drag: DragConstraints,
    /// Pointer history used for the release velocity.
    pub velocity_window: Duration,
}

impl SessionConfig {
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_drag(mut self, drag: DragConstraints) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_velocity_window(mut self, window: Duration) -> Self {
        self.velocity_window = window;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
            notification_duration: Duration::from_millis(NOTIFICATION_DURATION_MS),
            gesture: GestureConfig::default(),
            drag: DragConstraints::default(),
            velocity_window: Duration::from_millis(VELOCITY_WINDOW_MS),
        }
    }
}
