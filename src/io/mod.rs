// Purpose - host-side plumbing: offline block runner, pulse observability

/// Realtime-safe pulse event channel (audio thread -> observer thread).
#[cfg(feature = "rtrb")]
pub mod probe;
/// Offline host runner driving one module block-by-block.
pub mod runner;

pub use runner::HostRunner;

/// Per-port input voltage buffers for one block. Ports missing a buffer
/// (or a buffer shorter than the block) read as 0.0 V, the idle gate level.
#[derive(Debug, Default)]
pub struct VoltageInput {
    pub ports: Vec<Vec<f32>>,
}

/// Per-port output voltage buffers for one block.
#[derive(Debug, Default)]
pub struct VoltageOutput {
    pub ports: Vec<Vec<f32>>,
}
