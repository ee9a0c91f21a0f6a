//! Swipe session state machine.
//!
//! A session is `Idle` while the active card rests. Submitting an outcome
//! sets the exit hint at once and moves the session to `Resolving`; once the
//! settle delay has passed, [`SwipeSession::tick`] commits the outcome:
//! bookkeeping, toast, index advance and hint reset happen together. A new
//! swipe is rejected until that commit, so one card can never advance the
//! stack twice.

use smallvec::SmallVec;
use web_time::Instant;

use shopswipe_animation::{exit_motion, CardMotion, ExitDirection};
use shopswipe_foundation::{DragGesture, DragTracker, PointerEvent, PointerEventKind, SwipeOutcome};

use crate::catalog::Catalog;
use crate::config::SessionConfig;
use crate::error::SwipeError;
use crate::notification::{Notification, NotificationKind};
use crate::product::{Product, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPhase {
    /// Card at rest, waiting for a gesture.
    Idle,
    /// Outcome chosen; waiting for the settle delay before committing.
    Resolving,
}

/// Everything a renderer needs to project the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Index of the active product. Always below the catalog length when the
    /// catalog is non-empty.
    pub index: usize,
    /// Liked product ids in commit order. Duplicates are kept.
    pub liked: Vec<ProductId>,
    /// Cart product ids in commit order. Duplicates are kept.
    pub cart: Vec<ProductId>,
    pub notification: Option<Notification>,
    /// Direction the active card is leaving in, if it is leaving.
    pub exit_direction: Option<ExitDirection>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingResolution {
    product: ProductId,
    outcome: SwipeOutcome,
    commit_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledClear {
    generation: u64,
    at: Instant,
}

enum DueTimer {
    Commit,
    Clear(usize),
}

#[derive(Debug, Clone)]
pub struct SwipeSession {
    catalog: Catalog,
    config: SessionConfig,
    state: SessionState,
    pending: Option<PendingResolution>,
    clears: SmallVec<[ScheduledClear; 4]>,
    next_generation: u64,
    drag: DragTracker,
}

impl SwipeSession {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, SessionConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: SessionConfig) -> Self {
        Self {
            catalog,
            config,
            state: SessionState::default(),
            pending: None,
            clears: SmallVec::new(),
            next_generation: 1,
            drag: DragTracker::new(config.drag).with_velocity_window(config.velocity_window),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn liked(&self) -> &[ProductId] {
        &self.state.liked
    }

    pub fn cart(&self) -> &[ProductId] {
        &self.state.cart
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.state.notification.as_ref()
    }

    pub fn exit_direction(&self) -> Option<ExitDirection> {
        self.state.exit_direction
    }

    pub fn drag_tracker(&self) -> &DragTracker {
        &self.drag
    }

    pub fn phase(&self) -> ResolutionPhase {
        if self.pending.is_some() {
            ResolutionPhase::Resolving
        } else {
            ResolutionPhase::Idle
        }
    }

    /// Product the user is currently looking at, if any.
    pub fn current_product(&self) -> Option<&Product> {
        let product = self.catalog.get(self.state.index);
        debug_assert!(
            self.catalog.is_empty() || product.is_some(),
            "index {} out of range for catalog of {}",
            self.state.index,
            self.catalog.len()
        );
        product
    }

    /// Motion description for the active card.
    pub fn motion(&self) -> CardMotion {
        exit_motion(self.state.exit_direction)
    }

    /// Record the direction the active card should leave in.
    ///
    /// Only selects the exit animation; the bookkeeping happens when a
    /// submitted outcome commits.
    pub fn request_exit(&mut self, direction: Option<ExitDirection>) {
        if self.catalog.is_empty() {
            return;
        }
        self.state.exit_direction = direction;
    }

    /// Submit an outcome for `product`, which must be the active product.
    ///
    /// The exit hint is set immediately and the commit is scheduled after
    /// the settle delay. With a zero settle delay the commit happens now.
    pub fn submit_gesture(
        &mut self,
        product: ProductId,
        outcome: SwipeOutcome,
        now: Instant,
    ) -> Result<(), SwipeError> {
        let active = self.current_product().map(|p| p.id).ok_or(SwipeError::EmptyCatalog)?;
        if let Some(pending) = &self.pending {
            log::warn!(
                "ignoring {} on product {product}: product {} still settling",
                outcome.as_str(),
                pending.product
            );
            return Err(SwipeError::ResolutionInFlight {
                pending: pending.product,
            });
        }
        if active != product {
            log::warn!("ignoring {} on stale product {product}", outcome.as_str());
            return Err(SwipeError::StaleProduct {
                expected: active,
                actual: product,
            });
        }

        self.drag.reset();
        self.request_exit(Some(outcome.exit_direction()));
        let pending = PendingResolution {
            product,
            outcome,
            commit_at: now + self.config.settle_delay,
        };
        log::debug!("{} on product {product} resolving", outcome.as_str());
        if self.config.settle_delay.is_zero() {
            self.commit(pending);
        } else {
            self.pending = Some(pending);
        }
        Ok(())
    }

    /// Classify a completed drag on `product` and submit the outcome.
    ///
    /// Returns `Ok(None)` when the drag did not qualify; the card springs
    /// back and nothing changes.
    pub fn on_drag_end(
        &mut self,
        product: ProductId,
        gesture: &DragGesture,
        now: Instant,
    ) -> Result<Option<SwipeOutcome>, SwipeError> {
        match self.config.gesture.classify(gesture) {
            Some(outcome) => {
                self.submit_gesture(product, outcome, now)?;
                Ok(Some(outcome))
            }
            None => {
                log::trace!(
                    "drag on product {product} below thresholds, springing back"
                );
                Ok(None)
            }
        }
    }

    /// Feed a raw pointer event for the active card.
    ///
    /// Presses are ignored while a swipe is settling, since the card on
    /// screen is already leaving. Without a card there is nothing to drag.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
    ) -> Result<Option<SwipeOutcome>, SwipeError> {
        if self.catalog.is_empty() {
            return Err(SwipeError::EmptyCatalog);
        }
        if event.kind == PointerEventKind::Down && self.pending.is_some() {
            log::trace!("pointer press while resolving ignored");
            return Ok(None);
        }
        let Some(gesture) = self.drag.handle(event) else {
            return Ok(None);
        };
        let product = self.current_product().map(|p| p.id).ok_or(SwipeError::EmptyCatalog)?;
        self.on_drag_end(product, &gesture, event.timestamp)
    }

    /// Fire every timer due at or before `now`, oldest first.
    ///
    /// Returns `true` when the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(timer) = self.next_due(now) {
            match timer {
                DueTimer::Commit => {
                    if let Some(pending) = self.pending.take() {
                        self.commit(pending);
                        changed = true;
                    }
                }
                DueTimer::Clear(slot) => {
                    let clear = self.clears.remove(slot);
                    changed |= self.fire_clear(clear);
                }
            }
        }
        changed
    }

    /// Earliest pending timer, for wait-until scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        let commit = self.pending.map(|p| p.commit_at);
        let clear = self.clears.iter().map(|c| c.at).min();
        match (commit, clear) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// No swipe settling and no toast waiting to clear.
    pub fn is_idle(&self) -> bool {
        self.pending.is_none() && self.clears.is_empty()
    }

    fn next_due(&self, now: Instant) -> Option<DueTimer> {
        let commit = self
            .pending
            .filter(|p| p.commit_at <= now)
            .map(|p| (p.commit_at, DueTimer::Commit));
        let clear = self
            .clears
            .iter()
            .enumerate()
            .filter(|(_, c)| c.at <= now)
            .min_by_key(|(_, c)| c.at)
            .map(|(slot, c)| (c.at, DueTimer::Clear(slot)));
        match (commit, clear) {
            (Some(commit), Some(clear)) if clear.0 < commit.0 => Some(clear.1),
            (Some(commit), _) => Some(commit.1),
            (None, clear) => clear.map(|(_, timer)| timer),
        }
    }

    fn commit(&mut self, pending: PendingResolution) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        debug_assert!(self.state.index < len, "commit with index out of range");

        let PendingResolution {
            product,
            outcome,
            commit_at,
        } = pending;
        match outcome {
            SwipeOutcome::Like => self.state.liked.push(product),
            SwipeOutcome::AddToCart => self.state.cart.push(product),
            SwipeOutcome::Pass => {}
        }
        log::debug!("committed {} on product {product}", outcome.as_str());

        let generation = self.next_generation;
        self.next_generation += 1;
        self.state.notification = Some(Notification::new(
            generation,
            NotificationKind::from_outcome(outcome),
        ));
        self.clears.push(ScheduledClear {
            generation,
            at: commit_at + self.config.notification_duration,
        });

        self.state.index = (self.state.index + 1) % len;
        self.state.exit_direction = None;
    }

    fn fire_clear(&mut self, clear: ScheduledClear) -> bool {
        match self.state.notification {
            Some(current) if current.generation == clear.generation => {
                self.state.notification = None;
                true
            }
            _ => {
                log::trace!("dropping stale toast clear {}", clear.generation);
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
