//! Animation parameters for ShopSwipe cards
//!
//! Provides tween specs with easing curves and the declarative motion table
//! a renderer uses to dismiss the active product card.

mod animation;
mod motion;

pub use animation::*;
pub use motion::*;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, Lerp};
    pub use crate::motion::{drag_feedback, exit_motion, CardMotion, CardTransform, ExitDirection};
}
