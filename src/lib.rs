pub mod dsp;
pub mod io;
pub mod module; // Host-facing per-sample module layer

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Width of an emitted trigger pulse, in seconds.
pub const TRIGGER_PULSE_SECS: f32 = 1e-3;
/// Output voltage while a pulse is active.
pub const TRIGGER_HIGH_VOLTS: f32 = 10.0;
/// Output voltage while a pulse is idle.
pub const TRIGGER_LOW_VOLTS: f32 = 0.0;
