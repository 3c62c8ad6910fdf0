//! Benchmark comparing `hires_timer::HighResTimer::now_millis()` with `std::time::Instant::now()`.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;
use std::time::Instant;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hires_timer::HighResTimer;

fn timestamp_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp_capture");

    let timer = HighResTimer::new().expect("benchmark host must have a high-resolution counter");

    group.bench_with_input(BenchmarkId::new("std_instant", "now"), &(), |b, ()| {
        b.iter(|| black_box(Instant::now()));
    });

    group.bench_with_input(BenchmarkId::new("high_res_timer", "now_millis"), &(), |b, ()| {
        b.iter(|| black_box(timer.now_millis()));
    });

    group.bench_with_input(BenchmarkId::new("high_res_timer", "now_ticks"), &(), |b, ()| {
        b.iter(|| black_box(timer.now_ticks()));
    });

    group.finish();
}

criterion_group!(benches, timestamp_comparison);
criterion_main!(benches);
