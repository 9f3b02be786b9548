//! Benchmarks for the module driven through the host runner.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use divider_dsp::io::{HostRunner, VoltageInput, VoltageOutput};
use divider_dsp::module::ClockDividerModule;

use crate::BLOCK_SIZES;

pub fn bench_runner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/runner");

    for &size in BLOCK_SIZES {
        let input = VoltageInput {
            ports: vec![(0..size)
                .map(|i| if (i / 32) % 2 == 0 { 0.0 } else { 10.0 })
                .collect()],
        };
        let mut output = VoltageOutput::default();

        let mut runner = HostRunner::new(Box::new(ClockDividerModule::new()), 48_000.0);
        group.bench_with_input(BenchmarkId::new("divider_block", size), &size, |b, _| {
            b.iter(|| {
                runner.process_block(black_box(&input), black_box(&mut output));
            })
        });
    }

    group.finish();
}
