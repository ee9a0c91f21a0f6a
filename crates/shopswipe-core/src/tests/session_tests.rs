use super::*;

use crate::view::ActionButton;
use shopswipe_foundation::Point;
use web_time::Duration;

fn abc() -> Catalog {
    Catalog::new(vec![
        Product::new(1, "A", "brand"),
        Product::new(2, "B", "brand"),
        Product::new(3, "C", "brand"),
    ])
    .expect("unique ids")
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Drag the active card and let the swipe settle.
fn swipe(session: &mut SwipeSession, gesture: DragGesture, now: Instant) -> Option<SwipeOutcome> {
    let product = session.current_product().expect("active product").id;
    let outcome = session
        .on_drag_end(product, &gesture, now)
        .expect("drag accepted");
    session.tick(now + ms(200));
    outcome
}

#[test]
fn left_swipe_passes_and_advances() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    let outcome = swipe(&mut session, DragGesture::new(-150.0, 0.0), start);

    assert_eq!(outcome, Some(SwipeOutcome::Pass));
    assert_eq!(session.current_product().map(|p| p.id), Some(ProductId(2)));
    assert!(session.liked().is_empty());
    assert!(session.cart().is_empty());
}

#[test]
fn right_swipe_likes_and_advances() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    let outcome = swipe(&mut session, DragGesture::new(150.0, 0.0), start);

    assert_eq!(outcome, Some(SwipeOutcome::Like));
    assert_eq!(session.current_product().map(|p| p.id), Some(ProductId(2)));
    assert_eq!(session.liked(), &[ProductId(1)]);
    assert!(session.cart().is_empty());
}

#[test]
fn upward_flick_adds_to_cart_and_advances() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    let outcome = swipe(&mut session, DragGesture::new(0.0, -150.0), start);

    assert_eq!(outcome, Some(SwipeOutcome::AddToCart));
    assert_eq!(session.current_product().map(|p| p.id), Some(ProductId(2)));
    assert_eq!(session.cart(), &[ProductId(1)]);
    assert!(session.liked().is_empty());
}

#[test]
fn weak_drag_springs_back_without_changes() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    let outcome = swipe(&mut session, DragGesture::new(60.0, -20.0), start);

    assert_eq!(outcome, None);
    assert_eq!(session.phase(), ResolutionPhase::Idle);
    assert_eq!(session.index(), 0);
    assert_eq!(session.exit_direction(), None);
    assert!(session.notification().is_none());
    assert!(session.is_idle());
}

#[test]
fn index_wraps_after_last_product() {
    let mut now = Instant::now();
    let mut session = SwipeSession::new(abc());

    for _ in 0..3 {
        swipe(&mut session, DragGesture::new(-150.0, 0.0), now);
        now += ms(300);
    }

    assert_eq!(session.index(), 0);
    assert_eq!(session.current_product().map(|p| p.id), Some(ProductId(1)));
}

#[test]
fn single_product_stays_active_after_wrap() {
    let start = Instant::now();
    let catalog = Catalog::new(vec![Product::new(9, "only", "brand")]).expect("catalog");
    let mut session = SwipeSession::new(catalog);

    swipe(&mut session, DragGesture::new(150.0, 0.0), start);
    assert_eq!(session.index(), 0);
    assert_eq!(session.current_product().map(|p| p.id), Some(ProductId(9)));

    swipe(&mut session, DragGesture::new(150.0, 0.0), start + ms(500));
    assert_eq!(session.liked(), &[ProductId(9), ProductId(9)]);
}

#[test]
fn exit_hint_is_set_immediately_and_cleared_on_commit() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    session
        .submit_gesture(ProductId(1), SwipeOutcome::Like, start)
        .expect("accepted");
    assert_eq!(session.phase(), ResolutionPhase::Resolving);
    assert_eq!(session.exit_direction(), Some(ExitDirection::Right));
    assert_eq!(session.motion(), exit_motion(Some(ExitDirection::Right)));
    // Bookkeeping waits for the settle delay.
    assert_eq!(session.index(), 0);
    assert!(session.liked().is_empty());
    assert_eq!(session.next_deadline(), Some(start + ms(200)));

    assert!(!session.tick(start + ms(199)));
    assert_eq!(session.index(), 0);

    assert!(session.tick(start + ms(200)));
    assert_eq!(session.phase(), ResolutionPhase::Idle);
    assert_eq!(session.index(), 1);
    assert_eq!(session.exit_direction(), None);
    assert!(session.motion().is_rest());
}

#[test]
fn second_swipe_while_resolving_is_rejected() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    session
        .submit_gesture(ProductId(1), SwipeOutcome::Like, start)
        .expect("accepted");
    let err = session
        .submit_gesture(ProductId(1), SwipeOutcome::AddToCart, start + ms(50))
        .expect_err("in flight");
    assert_eq!(
        err,
        SwipeError::ResolutionInFlight {
            pending: ProductId(1)
        }
    );
    assert_eq!(session.exit_direction(), Some(ExitDirection::Right));

    session.tick(start + ms(1000));
    assert_eq!(session.index(), 1);
    assert_eq!(session.liked(), &[ProductId(1)]);
    assert!(session.cart().is_empty());
}

#[test]
fn stale_product_is_rejected() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    let err = session
        .submit_gesture(ProductId(2), SwipeOutcome::Like, start)
        .expect_err("not active");
    assert_eq!(
        err,
        SwipeError::StaleProduct {
            expected: ProductId(1),
            actual: ProductId(2)
        }
    );
    assert_eq!(session.phase(), ResolutionPhase::Idle);
    assert_eq!(session.exit_direction(), None);
}

#[test]
fn empty_catalog_is_a_no_op() {
    let start = Instant::now();
    let mut session = SwipeSession::new(Catalog::empty());

    assert!(session.current_product().is_none());
    assert_eq!(
        session.submit_gesture(ProductId(1), SwipeOutcome::Like, start),
        Err(SwipeError::EmptyCatalog)
    );
    assert_eq!(
        session.press(ActionButton::Like, start),
        Err(SwipeError::EmptyCatalog)
    );
    session.request_exit(Some(ExitDirection::Left));
    assert_eq!(session.exit_direction(), None);
    assert!(!session.tick(start + ms(5000)));
    assert_eq!(session.next_deadline(), None);
    assert_eq!(session.state(), &SessionState::default());
}

#[test]
fn notification_kind_follows_outcome() {
    let mut now = Instant::now();
    let mut session = SwipeSession::new(abc());

    for (gesture, kind) in [
        (DragGesture::new(150.0, 0.0), NotificationKind::Liked),
        (DragGesture::new(0.0, -150.0), NotificationKind::Cart),
        (DragGesture::new(-150.0, 0.0), NotificationKind::Passed),
    ] {
        swipe(&mut session, gesture, now);
        assert_eq!(session.notification().map(|n| n.kind), Some(kind));
        now += ms(2000);
        session.tick(now);
    }
}

#[test]
fn notification_clears_after_exactly_one_second() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    session
        .press(ActionButton::Like, start)
        .expect("accepted");
    session.tick(start + ms(200));
    let shown = session.notification().copied().expect("toast shown");
    assert_eq!(shown.kind, NotificationKind::Liked);
    assert_eq!(session.next_deadline(), Some(start + ms(1200)));

    assert!(!session.tick(start + ms(1199)));
    assert!(session.notification().is_some());

    assert!(session.tick(start + ms(1200)));
    assert!(session.notification().is_none());
    assert!(session.is_idle());
}

#[test]
fn stale_clear_keeps_newer_notification() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    session.press(ActionButton::Like, start).expect("first");
    session.tick(start + ms(200));
    // Second swipe commits at 500 ms; the first toast's clear is due at 1200 ms.
    session
        .press(ActionButton::AddToCart, start + ms(300))
        .expect("second");
    session.tick(start + ms(500));
    let newer = session.notification().copied().expect("second toast");
    assert_eq!(newer.kind, NotificationKind::Cart);

    session.tick(start + ms(1200));
    assert_eq!(session.notification().copied(), Some(newer));

    assert!(session.tick(start + ms(1500)));
    assert!(session.notification().is_none());
}

#[test]
fn late_tick_fires_timers_in_order() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    session.press(ActionButton::Pass, start).expect("accepted");
    // One tick long after everything was due: commit, then clear.
    assert!(session.tick(start + ms(10_000)));
    assert_eq!(session.index(), 1);
    assert!(session.notification().is_none());
    assert!(session.is_idle());
}

#[test]
fn pass_never_grows_sequences() {
    let mut now = Instant::now();
    let mut session = SwipeSession::new(abc());

    let mut liked_len = 0;
    let mut cart_len = 0;
    for button in [
        ActionButton::Like,
        ActionButton::Pass,
        ActionButton::AddToCart,
        ActionButton::Pass,
        ActionButton::Like,
    ] {
        session.press(button, now).expect("accepted");
        session.tick(now + ms(200));
        now += ms(250);

        let (liked, cart) = (session.liked().len(), session.cart().len());
        assert!(liked >= liked_len && cart >= cart_len);
        if button == ActionButton::Pass {
            assert_eq!((liked, cart), (liked_len, cart_len));
        }
        liked_len = liked;
        cart_len = cart;
    }
    assert_eq!(session.liked(), &[ProductId(1), ProductId(2)]);
    assert_eq!(session.cart(), &[ProductId(3)]);
}

#[test]
fn zero_settle_delay_commits_immediately() {
    let start = Instant::now();
    let config = SessionConfig::default().with_settle_delay(Duration::ZERO);
    let mut session = SwipeSession::with_config(abc(), config);

    session.press(ActionButton::Like, start).expect("accepted");
    assert_eq!(session.phase(), ResolutionPhase::Idle);
    assert_eq!(session.index(), 1);
    assert_eq!(session.next_deadline(), Some(start + ms(1000)));
}

#[test]
fn pointer_drag_drives_the_session() {
    let start = Instant::now();
    let mut session = SwipeSession::new(abc());

    let press = PointerEvent::new(PointerEventKind::Down, Point::new(200.0, 300.0), start);
    let drag = PointerEvent::new(
        PointerEventKind::Move,
        Point::new(120.0, 300.0),
        start + ms(40),
    );
    let release = PointerEvent::new(PointerEventKind::Up, Point::new(30.0, 300.0), start + ms(80));

    assert_eq!(session.handle_pointer(&press), Ok(None));
    assert_eq!(session.handle_pointer(&drag), Ok(None));
    assert!(session.snapshot().card_transform.offset_x < 0.0);
    assert_eq!(session.handle_pointer(&release), Ok(Some(SwipeOutcome::Pass)));

    // The card is leaving; a new press is ignored until the commit.
    let again = PointerEvent::new(PointerEventKind::Down, Point::new(0.0, 0.0), start + ms(100));
    assert_eq!(session.handle_pointer(&again), Ok(None));
    assert!(!session.drag_tracker().is_dragging());

    session.tick(start + ms(280));
    assert_eq!(session.current_product().map(|p| p.id), Some(ProductId(2)));
}

#[test]
fn empty_catalog_ignores_pointer_input() {
    let start = Instant::now();
    let mut session = SwipeSession::new(Catalog::empty());

    let press = PointerEvent::new(PointerEventKind::Down, Point::new(180.0, 320.0), start);
    let drag = PointerEvent::new(
        PointerEventKind::Move,
        Point::new(240.0, 320.0),
        start + ms(40),
    );
    assert_eq!(session.handle_pointer(&press), Err(SwipeError::EmptyCatalog));
    assert_eq!(session.handle_pointer(&drag), Err(SwipeError::EmptyCatalog));

    assert!(!session.drag_tracker().is_dragging());
    let snapshot = session.snapshot();
    assert!(snapshot.card.is_none());
    assert!(snapshot.card_transform.is_rest());
}

#[test]
fn empty_catalog_with_zero_settle_delay_never_commits() {
    let start = Instant::now();
    let config = SessionConfig::default().with_settle_delay(Duration::ZERO);
    let mut session = SwipeSession::with_config(Catalog::empty(), config);

    assert_eq!(
        session.press(ActionButton::Pass, start),
        Err(SwipeError::EmptyCatalog)
    );
    assert_eq!(session.state(), &SessionState::default());
    assert!(session.is_idle());
}

#[test]
fn velocity_window_comes_from_config() {
    // Fast upward move early in the drag, then the pointer holds still.
    let events = |start: Instant| {
        [
            PointerEvent::new(PointerEventKind::Down, Point::new(180.0, 400.0), start),
            PointerEvent::new(PointerEventKind::Move, Point::new(180.0, 300.0), start + ms(20)),
            PointerEvent::new(PointerEventKind::Move, Point::new(180.0, 300.0), start + ms(60)),
            PointerEvent::new(PointerEventKind::Up, Point::new(180.0, 300.0), start + ms(80)),
        ]
    };
    let start = Instant::now();

    let mut default_window = SwipeSession::new(abc());
    let mut outcome = None;
    for event in events(start) {
        outcome = default_window.handle_pointer(&event).expect("accepted");
    }
    assert_eq!(outcome, Some(SwipeOutcome::AddToCart));

    let config = SessionConfig::default().with_velocity_window(ms(30));
    let mut short_window = SwipeSession::with_config(abc(), config);
    let mut outcome = Some(SwipeOutcome::Pass);
    for event in events(start) {
        outcome = short_window.handle_pointer(&event).expect("accepted");
    }
    assert_eq!(outcome, None);
    assert!(short_window.is_idle());
}
