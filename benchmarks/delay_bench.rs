use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use pacer::adapters::TokioTimeAdapter;
use pacer::delay::{delay, Pacer};

fn rt() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime")
}

// Zero-duration delays measure pure dispatch: one trip through the scheduler
// with no timer wait.
fn bench_delay_dispatch(c: &mut Criterion) {
    let rt = rt();

    c.bench_function("delay_zero_dispatch", |b| {
        b.to_async(&rt).iter(|| delay(Some(0)));
    });
}

fn bench_pacer_dispatch(c: &mut Criterion) {
    let rt = rt();
    let pacer = Pacer::new(Arc::new(TokioTimeAdapter));

    c.bench_function("pacer_zero_dispatch", |b| {
        b.to_async(&rt).iter(|| pacer.delay(Some(0)));
    });
}

criterion_group!(benches, bench_delay_dispatch, bench_pacer_dispatch);
criterion_main!(benches);
