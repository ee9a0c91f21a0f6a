use web_time::Instant;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer sample reported by the renderer for the active card.
///
/// Positions are in the card's parent coordinate space; only differences
/// between samples matter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub timestamp: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, timestamp: Instant) -> Self {
        Self {
            id: 0,
            kind,
            position,
            timestamp,
        }
    }

    /// Set the pointer id for multi-pointer platforms.
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
