//! Low-level DSP primitives used by the host-facing module layer.
//!
//! These components are allocation-free and realtime-safe, making them safe
//! to run inside a host's per-sample audio callback. They intentionally stay
//! focused on the timing math so the module layer can handle port plumbing
//! and host registration.

/// Edge-counting clock divider core.
pub mod divider;
/// Retriggerable one-shot pulse timer.
pub mod pulse;
/// Hysteresis edge detector and voltage rescaling.
pub mod schmitt;

pub use divider::{ClockDividerCore, DivisionCounter, DIVISORS};
pub use pulse::PulseGenerator;
pub use schmitt::{rescale, SchmittTrigger};
