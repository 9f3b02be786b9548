//! Benchmarks for the hysteresis edge detector.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use divider_dsp::dsp::{rescale, SchmittTrigger};

use crate::BLOCK_SIZES;

pub fn bench_schmitt(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/schmitt");

    for &size in BLOCK_SIZES {
        // Square-wave clock toggling every 32 samples, in raw volts.
        let input: Vec<f32> = (0..size)
            .map(|i| if (i / 32) % 2 == 0 { 0.0 } else { 10.0 })
            .collect();

        let mut trig = SchmittTrigger::new();
        group.bench_with_input(BenchmarkId::new("square_clock", size), &size, |b, _| {
            b.iter(|| {
                let mut edges = 0u32;
                for &volts in &input {
                    if trig.process(black_box(rescale(volts, 0.1, 2.0, 0.0, 1.0))) {
                        edges += 1;
                    }
                }
                black_box(edges)
            })
        });

        // Worst case: chatter inside the hysteresis band.
        let chatter: Vec<f32> = (0..size)
            .map(|i| if i % 2 == 0 { 0.4 } else { 0.6 })
            .collect();
        let mut trig = SchmittTrigger::new();
        group.bench_with_input(BenchmarkId::new("chatter", size), &size, |b, _| {
            b.iter(|| {
                for &value in &chatter {
                    black_box(trig.process(black_box(value)));
                }
            })
        });
    }

    group.finish();
}
