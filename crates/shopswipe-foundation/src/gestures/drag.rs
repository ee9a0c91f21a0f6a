//! Drag recogniser for the active card.
//!
//! Collects pointer samples between press and release and reduces them to a
//! [`DragGesture`]: horizontal travel plus the vertical release velocity.

use smallvec::SmallVec;
use web_time::{Duration, Instant};

use super::swipe::DragGesture;
use crate::gesture_constants::{DRAG_ELASTICITY, VELOCITY_WINDOW_MS};
use crate::input::{Point, PointerEvent, PointerEventKind, PointerId};

/// How far and along which axis the card follows the pointer.
///
/// The card is anchored at rest (`left == right == 0`); travel beyond the
/// anchor is scaled by `elasticity` and the card springs back on release.
/// Vertical pointer motion never moves the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConstraints {
    pub left: f32,
    pub right: f32,
    pub elasticity: f32,
}

impl DragConstraints {
    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    /// Card offset for a given pointer offset from the press position.
    pub fn visual_offset(&self, pointer_offset: Point) -> Point {
        let anchored = pointer_offset.x.clamp(self.left, self.right);
        let overflow = pointer_offset.x - anchored;
        Point::new(anchored + overflow * self.elasticity, 0.0)
    }
}

impl Default for DragConstraints {
    fn default() -> Self {
        Self {
            left: 0.0,
            right: 0.0,
            elasticity: DRAG_ELASTICITY,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    position: Point,
    timestamp: Instant,
}

#[derive(Debug, Clone)]
struct ActiveDrag {
    pointer: PointerId,
    origin: Point,
    samples: SmallVec<[Sample; 16]>,
}

impl ActiveDrag {
    fn push(&mut self, position: Point, timestamp: Instant, window: Duration) {
        self.samples.push(Sample {
            position,
            timestamp,
        });
        self.samples
            .retain(|sample| timestamp.saturating_duration_since(sample.timestamp) <= window);
    }

    fn last_position(&self) -> Point {
        self.samples
            .last()
            .map_or(self.origin, |sample| sample.position)
    }

    fn vertical_velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return 0.0;
        };
        let elapsed = last
            .timestamp
            .saturating_duration_since(first.timestamp)
            .as_secs_f32();
        if elapsed <= f32::EPSILON {
            return 0.0;
        }
        (last.position.y - first.position.y) / elapsed
    }
}

/// Tracks one pointer drag at a time on the active card.
#[derive(Debug, Clone)]
pub struct DragTracker {
    constraints: DragConstraints,
    velocity_window: Duration,
    active: Option<ActiveDrag>,
}

impl DragTracker {
    pub fn new(constraints: DragConstraints) -> Self {
        Self {
            constraints,
            velocity_window: Duration::from_millis(VELOCITY_WINDOW_MS),
            active: None,
        }
    }

    pub fn with_velocity_window(mut self, window: Duration) -> Self {
        self.velocity_window = window;
        self
    }

    pub fn constraints(&self) -> DragConstraints {
        self.constraints
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Pointer travel since the press, or zero when idle.
    pub fn pointer_offset(&self) -> Point {
        self.active.as_ref().map_or(Point::ZERO, |drag| {
            let last = drag.last_position();
            Point::new(last.x - drag.origin.x, last.y - drag.origin.y)
        })
    }

    /// Where the card is drawn relative to rest.
    pub fn visual_offset(&self) -> Point {
        self.constraints.visual_offset(self.pointer_offset())
    }

    /// Drop any drag in progress.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Feed a pointer event. Returns the completed gesture on release.
    pub fn handle(&mut self, event: &PointerEvent) -> Option<DragGesture> {
        let window = self.velocity_window;
        match event.kind {
            PointerEventKind::Down => {
                if self.active.is_some() {
                    log::trace!("pointer {} pressed mid-drag, restarting", event.id);
                }
                let mut drag = ActiveDrag {
                    pointer: event.id,
                    origin: event.position,
                    samples: SmallVec::new(),
                };
                drag.push(event.position, event.timestamp, window);
                self.active = Some(drag);
                None
            }
            PointerEventKind::Move => {
                if let Some(drag) = self.active.as_mut().filter(|d| d.pointer == event.id) {
                    drag.push(event.position, event.timestamp, window);
                }
                None
            }
            PointerEventKind::Up => {
                let mut drag = self.active.take()?;
                if drag.pointer != event.id {
                    self.active = Some(drag);
                    return None;
                }
                drag.push(event.position, event.timestamp, window);
                let gesture = DragGesture::new(
                    event.position.x - drag.origin.x,
                    drag.vertical_velocity(),
                );
                log::trace!(
                    "drag ended: offset {:.1}, vertical velocity {:.1}",
                    gesture.horizontal_offset,
                    gesture.vertical_velocity
                );
                Some(gesture)
            }
            PointerEventKind::Cancel => {
                if self
                    .active
                    .as_ref()
                    .is_some_and(|drag| drag.pointer == event.id)
                {
                    self.active = None;
                }
                None
            }
        }
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DragConstraints::default())
    }
}
