//! Host-level scenario benchmarks.
//!
//! These model the full path a host exercises: port banks, the module
//! trait call, and block plumbing through the runner.

mod runner;

pub use runner::bench_runner;
