//! Swipe session controller for ShopSwipe
//!
//! Owns the product catalog, the liked and cart sequences, the transient
//! confirmation toast and the exit hint of the active card. Time is injected
//! by the caller: operations take `now`, [`SwipeSession::tick`] fires due
//! timers and [`SwipeSession::next_deadline`] tells the event loop when to
//! wake up next.

mod catalog;
mod config;
mod error;
mod notification;
mod product;
mod session;
mod view;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use notification::*;
pub use product::*;
pub use session::*;
pub use view::*;

pub use shopswipe_animation::{CardMotion, CardTransform, ExitDirection};
pub use shopswipe_foundation::{DragConstraints, DragGesture, GestureConfig, SwipeOutcome};

pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::config::SessionConfig;
    pub use crate::error::{CatalogError, SwipeError};
    pub use crate::notification::{Notification, NotificationKind};
    pub use crate::product::{Product, ProductId};
    pub use crate::session::{ResolutionPhase, SwipeSession};
    pub use crate::view::{ActionButton, ProductCardView, ScreenSnapshot};
    pub use shopswipe_foundation::{DragGesture, SwipeOutcome};
}
