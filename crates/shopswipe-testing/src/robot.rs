//! Robot testing harness for swipe sessions
//!
//! Drives a [`SwipeSession`] the way a user and an event loop would:
//! pointer drags on the card, taps on the action buttons, and a simulated
//! clock that fires the session's timers as it advances.
//!
//! # Example
//!
//! ```
//! use shopswipe_core::Catalog;
//! use shopswipe_testing::robot::SwipeRobot;
//!
//! let mut robot = SwipeRobot::new(Catalog::demo());
//! robot.swipe_right().expect("swipe accepted");
//! robot.wait_for_idle();
//! assert_eq!(robot.session().liked().len(), 1);
//! ```

use shopswipe_core::{
    ActionButton, Catalog, ProductId, SessionConfig, SwipeError, SwipeOutcome, SwipeSession,
};
use shopswipe_foundation::{Point, PointerEvent, PointerEventKind};
use web_time::{Duration, Instant};

/// Where drags start, in card parent coordinates.
const CARD_CENTER: Point = Point::new(180.0, 320.0);

/// Number of move events in a simulated drag.
const DRAG_STEPS: u32 = 10;

/// Upper bound on timer firings in `wait_for_idle`.
const MAX_IDLE_STEPS: usize = 64;

/// Programmatic control over a swipe session with simulated time.
pub struct SwipeRobot {
    session: SwipeSession,
    start: Instant,
    now: Instant,
}

impl SwipeRobot {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, SessionConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: SessionConfig) -> Self {
        let start = Instant::now();
        Self {
            session: SwipeSession::with_config(catalog, config),
            start,
            now: start,
        }
    }

    pub fn session(&self) -> &SwipeSession {
        &self.session
    }

    /// Current simulated time.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Simulated time since the robot was created.
    pub fn elapsed(&self) -> Duration {
        self.now.duration_since(self.start)
    }

    pub fn active_product_id(&self) -> Option<ProductId> {
        self.session.current_product().map(|product| product.id)
    }

    /// Advance the clock and fire due timers. Returns true if state changed.
    pub fn advance_time(&mut self, duration: Duration) -> bool {
        self.now += duration;
        self.session.tick(self.now)
    }

    /// Advance the clock deadline by deadline until no timer is pending.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_STEPS {
            let Some(deadline) = self.session.next_deadline() else {
                return;
            };
            if deadline > self.now {
                self.now = deadline;
            }
            self.session.tick(self.now);
        }
        log::warn!("session still busy after {MAX_IDLE_STEPS} timer steps");
    }

    /// Wait out the settle delay so a submitted swipe commits.
    pub fn settle(&mut self) -> bool {
        let delay = self.session.config().settle_delay;
        self.advance_time(delay)
    }

    /// Drag the card by (`dx`, `dy`) over `duration` and release.
    ///
    /// Pointer samples are spread evenly, so the release velocity is
    /// `dy / duration` per axis.
    pub fn drag(
        &mut self,
        dx: f32,
        dy: f32,
        duration: Duration,
    ) -> Result<Option<SwipeOutcome>, SwipeError> {
        let from = CARD_CENTER;
        self.pointer(PointerEventKind::Down, from)?;

        let step = duration / DRAG_STEPS;
        for i in 1..DRAG_STEPS {
            self.advance_time(step);
            let t = i as f32 / DRAG_STEPS as f32;
            self.pointer(
                PointerEventKind::Move,
                Point::new(from.x + dx * t, from.y + dy * t),
            )?;
        }

        self.advance_time(step);
        self.pointer(PointerEventKind::Up, Point::new(from.x + dx, from.y + dy))
    }

    /// Press the card and move it without releasing.
    pub fn hold_at(&mut self, dx: f32, dy: f32) -> Result<(), SwipeError> {
        self.pointer(PointerEventKind::Down, CARD_CENTER)?;
        self.pointer(
            PointerEventKind::Move,
            Point::new(CARD_CENTER.x + dx, CARD_CENTER.y + dy),
        )?;
        Ok(())
    }

    /// Release a held card where it is.
    pub fn release(&mut self) -> Result<Option<SwipeOutcome>, SwipeError> {
        let offset = self.session.drag_tracker().pointer_offset();
        self.pointer(
            PointerEventKind::Up,
            Point::new(CARD_CENTER.x + offset.x, CARD_CENTER.y + offset.y),
        )
    }

    pub fn swipe_left(&mut self) -> Result<Option<SwipeOutcome>, SwipeError> {
        self.drag(-150.0, 0.0, Duration::from_millis(120))
    }

    pub fn swipe_right(&mut self) -> Result<Option<SwipeOutcome>, SwipeError> {
        self.drag(150.0, 0.0, Duration::from_millis(120))
    }

    /// Quick upward flick: 60 units in 100 ms.
    pub fn flick_up(&mut self) -> Result<Option<SwipeOutcome>, SwipeError> {
        self.drag(0.0, -60.0, Duration::from_millis(100))
    }

    /// Tap one of the action buttons.
    pub fn tap(&mut self, button: ActionButton) -> Result<SwipeOutcome, SwipeError> {
        self.session.press(button, self.now)
    }

    /// All text a renderer would draw for the current frame.
    pub fn visible_text(&self) -> Vec<String> {
        let snapshot = self.session.snapshot();
        let mut texts = Vec::new();
        if let Some(card) = &snapshot.card {
            texts.push(card.product.brand.clone());
            texts.push(card.product.name.clone());
            texts.push(card.price_label.clone());
            texts.extend(card.original_price_label.clone());
            texts.extend(card.discount_badge.clone());
        }
        texts.extend(snapshot.position_label.clone());
        if let Some(notification) = snapshot.notification {
            texts.push(notification.message().to_string());
        }
        texts.extend(snapshot.buttons.iter().map(|b| b.label().to_string()));
        texts
    }

    fn pointer(
        &mut self,
        kind: PointerEventKind,
        position: Point,
    ) -> Result<Option<SwipeOutcome>, SwipeError> {
        let event = PointerEvent::new(kind, position, self.now);
        self.session.handle_pointer(&event)
    }
}
