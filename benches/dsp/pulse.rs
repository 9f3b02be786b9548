//! Benchmarks for the one-shot pulse generator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use divider_dsp::dsp::PulseGenerator;
use divider_dsp::TRIGGER_PULSE_SECS;

use crate::BLOCK_SIZES;

pub fn bench_pulse(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/pulse");
    let sample_time = 1.0 / 48_000.0;

    for &size in BLOCK_SIZES {
        // Active pulse decaying across the block.
        let mut pulse = PulseGenerator::new();
        group.bench_with_input(BenchmarkId::new("active", size), &size, |b, _| {
            b.iter(|| {
                pulse.trigger(TRIGGER_PULSE_SECS);
                for _ in 0..size {
                    black_box(pulse.process(black_box(sample_time)));
                }
            })
        });

        // Idle pulse: the floor-at-zero fast path.
        let mut pulse = PulseGenerator::new();
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(pulse.process(black_box(sample_time)));
                }
            })
        });
    }

    group.finish();
}
