//! Benchmarks for low-level DSP primitives.

mod divider;
mod pulse;
mod schmitt;

pub use divider::bench_divider;
pub use pulse::bench_pulse;
pub use schmitt::bench_schmitt;
