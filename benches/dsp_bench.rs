//! Benchmarks for DSP primitives and host-level scenarios.
//!
//! Run with: cargo bench
//!
//! These benchmarks measure the per-sample clock division path to ensure it
//! completes well within real-time audio deadlines.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Low-level primitives (schmitt, pulse, divider core)
//!   - scenarios/*  The full module driven through the host runner

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_schmitt,
    dsp::bench_pulse,
    dsp::bench_divider,
    // Host-level scenarios
    scenarios::bench_runner,
);
criterion_main!(benches);
