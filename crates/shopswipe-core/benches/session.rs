use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shopswipe_core::{ActionButton, Catalog, DragGesture, GestureConfig, Product, SwipeSession};
use web_time::{Duration, Instant};

const CATALOG_SIZES: &[usize] = &[5, 500];
const SWIPES_PER_ITER: usize = 64;

fn catalog_of(len: usize) -> Catalog {
    (0..len as u32)
        .map(|id| Product::new(id, format!("product {id}"), "bench").with_pricing(999, 1499, 33))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let config = GestureConfig::default();
    let gestures = [
        DragGesture::new(-150.0, 0.0),
        DragGesture::new(150.0, -400.0),
        DragGesture::new(0.0, -150.0),
        DragGesture::new(30.0, 20.0),
    ];
    c.bench_function("classify", |b| {
        b.iter(|| {
            for gesture in &gestures {
                black_box(config.classify(black_box(gesture)));
            }
        });
    });
}

fn bench_swipe_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_commit");
    for &len in CATALOG_SIZES {
        group.bench_with_input(BenchmarkId::new("catalog", len), &len, |b, &len| {
            let catalog = catalog_of(len);
            b.iter(|| {
                let mut session = SwipeSession::new(catalog.clone());
                let mut now = Instant::now();
                for i in 0..SWIPES_PER_ITER {
                    let button = ActionButton::ALL[i % ActionButton::ALL.len()];
                    let _ = session.press(button, now);
                    now += Duration::from_millis(250);
                    session.tick(now);
                }
                black_box(session.snapshot().position_label);
            });
        });
    }
    group.finish();
}

criterion_group!(session, bench_classify, bench_swipe_commit);
criterion_main!(session);
