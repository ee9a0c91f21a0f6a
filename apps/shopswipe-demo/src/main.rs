use anyhow::{bail, Context, Result};
use shopswipe_core::{ActionButton, Catalog, ScreenSnapshot, SwipeError, SwipeOutcome, SwipeSession};
use shopswipe_foundation::{Point, PointerEvent, PointerEventKind};
use web_time::{Duration, Instant};

/// One scripted user action.
#[derive(Clone, Copy, Debug)]
enum Step {
    /// Drag the card by (dx, dy) over the given milliseconds and release.
    Drag { dx: f32, dy: f32, millis: u64 },
    Tap(ActionButton),
    /// Let the simulated clock run.
    Wait(u64),
}

const SCRIPT: &[Step] = &[
    Step::Drag { dx: 160.0, dy: 0.0, millis: 150 },
    Step::Wait(300),
    Step::Drag { dx: 40.0, dy: -10.0, millis: 400 },
    Step::Drag { dx: 0.0, dy: -70.0, millis: 90 },
    Step::Wait(300),
    Step::Tap(ActionButton::Pass),
    Step::Tap(ActionButton::Like),
    Step::Wait(1200),
    Step::Tap(ActionButton::AddToCart),
    Step::Wait(300),
    Step::Drag { dx: -180.0, dy: -90.0, millis: 120 },
    Step::Wait(1500),
];

const CARD_CENTER: Point = Point::new(180.0, 320.0);
const DRAG_STEPS: u32 = 8;

struct Demo {
    session: SwipeSession,
    now: Instant,
}

impl Demo {
    fn new(catalog: Catalog) -> Self {
        Self {
            session: SwipeSession::new(catalog),
            now: Instant::now(),
        }
    }

    fn run(&mut self, step: Step) -> Result<()> {
        log::debug!("step {step:?}");
        let result = match step {
            Step::Drag { dx, dy, millis } => self.drag(dx, dy, Duration::from_millis(millis)),
            Step::Tap(button) => self.session.press(button, self.now).map(Some),
            Step::Wait(millis) => {
                self.wait(Duration::from_millis(millis));
                Ok(None)
            }
        };
        match result {
            Ok(Some(outcome)) => {
                log::info!("{} → exit {}", outcome.as_str(), outcome.exit_direction().as_str());
                self.print_frame();
            }
            Ok(None) => {}
            Err(err @ SwipeError::ResolutionInFlight { .. }) => log::warn!("{err}"),
            Err(err) => return Err(err).context("swipe rejected"),
        }
        Ok(())
    }

    fn drag(&mut self, dx: f32, dy: f32, duration: Duration) -> Result<Option<SwipeOutcome>, SwipeError> {
        self.pointer(PointerEventKind::Down, CARD_CENTER)?;
        let step = duration / DRAG_STEPS;
        for i in 1..=DRAG_STEPS {
            self.advance(step);
            let t = i as f32 / DRAG_STEPS as f32;
            let position = Point::new(CARD_CENTER.x + dx * t, CARD_CENTER.y + dy * t);
            if i < DRAG_STEPS {
                self.pointer(PointerEventKind::Move, position)?;
            } else {
                let outcome = self.pointer(PointerEventKind::Up, position)?;
                if outcome.is_none() {
                    log::info!("drag ({dx:.0}, {dy:.0}) sprang back");
                }
                return Ok(outcome);
            }
        }
        Ok(None)
    }

    fn pointer(&mut self, kind: PointerEventKind, position: Point) -> Result<Option<SwipeOutcome>, SwipeError> {
        self.session
            .handle_pointer(&PointerEvent::new(kind, position, self.now))
    }

    /// Run the clock forward, stopping at each timer so every frame change
    /// is printed.
    fn wait(&mut self, duration: Duration) {
        let target = self.now + duration;
        while let Some(deadline) = self.session.next_deadline().filter(|d| *d <= target) {
            self.now = self.now.max(deadline);
            if self.session.tick(self.now) {
                self.print_frame();
            }
        }
        self.now = target;
    }

    fn advance(&mut self, step: Duration) {
        self.now += step;
        if self.session.tick(self.now) {
            self.print_frame();
        }
    }

    fn print_frame(&self) {
        println!("{}", describe(&self.session.snapshot()));
    }
}

fn describe(snapshot: &ScreenSnapshot<'_>) -> String {
    let mut line = String::new();
    match &snapshot.card {
        Some(card) => {
            line.push_str(&format!(
                "[{}] {} {} {}",
                snapshot.position_label.as_deref().unwrap_or("-"),
                card.product.brand,
                card.product.name,
                card.price_label
            ));
            if let Some(original) = &card.original_price_label {
                line.push_str(&format!(" (was {original})"));
            }
            if let Some(badge) = &card.discount_badge {
                line.push_str(&format!(" {badge}"));
            }
        }
        None => line.push_str("[no products]"),
    }
    if let Some(exit) = &snapshot.motion.exit {
        line.push_str(&format!(" | leaving {}", exit.direction.as_str()));
    }
    if let Some(notification) = snapshot.notification {
        line.push_str(&format!(" | {}", notification.message()));
    }
    line
}

fn parse_laps(arg: Option<String>) -> Result<usize> {
    let Some(arg) = arg else {
        return Ok(1);
    };
    let laps: usize = arg
        .parse()
        .with_context(|| format!("invalid lap count {arg:?}"))?;
    if laps == 0 {
        bail!("lap count must be at least 1");
    }
    Ok(laps)
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let laps = parse_laps(std::env::args().nth(1))?;

    println!("=== ShopSwipe ===");
    println!("Swipe left to pass, right to like, or up to add to cart");
    println!();

    let mut demo = Demo::new(Catalog::demo());
    demo.print_frame();
    for lap in 1..=laps {
        log::info!("lap {lap} of {laps}");
        for step in SCRIPT {
            demo.run(*step)?;
        }
    }

    let session = &demo.session;
    println!();
    println!("liked: {:?}", session.liked());
    println!("cart:  {:?}", session.cart());
    Ok(())
}
