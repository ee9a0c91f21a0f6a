//! Confirmation toast shown after each committed swipe.

use shopswipe_foundation::SwipeOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Liked,
    Cart,
    Passed,
}

/// Toast background colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAccent {
    Green,
    Blue,
    Red,
}

impl NotificationKind {
    pub fn from_outcome(outcome: SwipeOutcome) -> Self {
        match outcome {
            SwipeOutcome::Like => Self::Liked,
            SwipeOutcome::AddToCart => Self::Cart,
            SwipeOutcome::Pass => Self::Passed,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Liked => "Added to Favorites! 💖",
            Self::Cart => "Added to Cart! 🛒",
            Self::Passed => "Passed 👋",
        }
    }

    pub fn accent(&self) -> NotificationAccent {
        match self {
            Self::Liked => NotificationAccent::Green,
            Self::Cart => NotificationAccent::Blue,
            Self::Passed => NotificationAccent::Red,
        }
    }
}

/// A visible toast. `generation` increases with every toast shown in a
/// session; a scheduled clear only removes the toast it was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub generation: u64,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(generation: u64, kind: NotificationKind) -> Self {
        Self { generation, kind }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
