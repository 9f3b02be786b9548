//! Benchmarks for the clock divider core.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use divider_dsp::dsp::ClockDividerCore;

use crate::BLOCK_SIZES;

pub fn bench_divider(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/divider");
    let sample_time = 1.0 / 48_000.0;

    for &size in BLOCK_SIZES {
        // Audio-rate-ish clock: edge every 64 samples keeps the counter
        // and pulse generators busy.
        let input: Vec<f32> = (0..size)
            .map(|i| if (i / 32) % 2 == 0 { 0.0 } else { 10.0 })
            .collect();

        let mut core = ClockDividerCore::new();
        group.bench_with_input(BenchmarkId::new("fast_clock", size), &size, |b, _| {
            b.iter(|| {
                for &volts in &input {
                    black_box(core.process(black_box(volts), black_box(sample_time)));
                }
            })
        });

        // No clock patched: the per-sample cost with everything idle.
        let mut core = ClockDividerCore::new();
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(core.process(black_box(0.0), black_box(sample_time)));
                }
            })
        });
    }

    group.finish();
}
