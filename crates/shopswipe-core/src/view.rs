//! Pure projections of a session for a renderer.

use web_time::Instant;

use shopswipe_animation::{drag_feedback, CardMotion, CardTransform};
use shopswipe_foundation::{DragConstraints, SwipeOutcome};

use crate::error::SwipeError;
use crate::notification::Notification;
use crate::product::{format_price, Product};
use crate::session::SwipeSession;

/// The three buttons below the card. Tapping one bypasses dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionButton {
    Pass,
    AddToCart,
    Like,
}

impl ActionButton {
    /// Buttons in screen order, left to right.
    pub const ALL: [ActionButton; 3] = [ActionButton::Pass, ActionButton::AddToCart, ActionButton::Like];

    pub fn outcome(&self) -> SwipeOutcome {
        match self {
            Self::Pass => SwipeOutcome::Pass,
            Self::AddToCart => SwipeOutcome::AddToCart,
            Self::Like => SwipeOutcome::Like,
        }
    }

    /// Accessibility label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::AddToCart => "Add to cart",
            Self::Like => "Like",
        }
    }
}

/// Display strings for a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView<'a> {
    pub product: &'a Product,
    pub price_label: String,
    /// Struck-through list price, only when the product is marked down.
    pub original_price_label: Option<String>,
    /// `"40% OFF"` badge, only when there is a discount.
    pub discount_badge: Option<String>,
}

impl<'a> ProductCardView<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            price_label: format_price(product.price),
            original_price_label: product
                .is_marked_down()
                .then(|| format_price(product.original_price)),
            discount_badge: product
                .has_discount()
                .then(|| format!("{}% OFF", product.discount_percentage)),
        }
    }
}

/// One frame's worth of state for the swipe screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSnapshot<'a> {
    pub card: Option<ProductCardView<'a>>,
    /// `"2 of 5"`.
    pub position_label: Option<String>,
    pub motion: CardMotion,
    /// Where the card is drawn right now: drag feedback while the pointer
    /// holds it, otherwise the resting state of `motion`.
    pub card_transform: CardTransform,
    pub drag_constraints: DragConstraints,
    pub notification: Option<&'a Notification>,
    pub buttons: [ActionButton; 3],
}

impl SwipeSession {
    /// Tap one of the action buttons for the active product.
    pub fn press(&mut self, button: ActionButton, now: Instant) -> Result<SwipeOutcome, SwipeError> {
        let product = self
            .current_product()
            .map(|p| p.id)
            .ok_or(SwipeError::EmptyCatalog)?;
        let outcome = button.outcome();
        self.submit_gesture(product, outcome, now)?;
        Ok(outcome)
    }

    pub fn snapshot(&self) -> ScreenSnapshot<'_> {
        let card = self.current_product();
        let motion = self.motion();
        let tracker = self.drag_tracker();
        let card_transform = if tracker.is_dragging() {
            drag_feedback(tracker.visual_offset().x)
        } else {
            motion.animate
        };
        ScreenSnapshot {
            card: card.map(ProductCardView::new),
            position_label: card
                .map(|_| format!("{} of {}", self.index() + 1, self.catalog().len())),
            motion,
            card_transform,
            drag_constraints: tracker.constraints(),
            notification: self.notification(),
            buttons: ActionButton::ALL,
        }
    }
}
