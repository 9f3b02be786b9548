#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::module::ports::PortIo;

/// Context passed to modules on every sample
///
/// Contains the host's timing information:
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - sample_time: Seconds elapsed per sample (1.0 / sample_rate)
pub struct ProcessCtx {
    pub sample_rate: f32,
    pub sample_time: f32,
}

impl ProcessCtx {
    /// Create context from a sample rate in Hz.
    pub fn from_rate(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            sample_time: 1.0 / sample_rate,
        }
    }
}

/// Port counts a module declares once at construction.
///
/// This is static metadata, not runtime state: hosts read it to allocate
/// port banks and draw panels, and it never changes for the lifetime of
/// the module instance.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleConfig {
    pub inputs: usize,
    pub outputs: usize,
    pub params: usize,
    pub lights: usize,
}

/// Core trait for modules driven by a host's per-sample callback
///
/// The host calls `process` once per audio sample from its realtime
/// thread. Implementations must not allocate, block, or perform I/O
/// inside `process`.
pub trait ModuleNode: Send {
    /// Port counts, consumed once at construction.
    fn config(&self) -> ModuleConfig;

    /// Process one sample: read input voltages, write output voltages.
    fn process(&mut self, io: &mut PortIo, ctx: &ProcessCtx);

    /// Return to the freshly-constructed state.
    ///
    /// Default implementation does nothing (stateless modules).
    fn reset(&mut self) {
        // Default: do nothing
    }
}

impl std::fmt::Debug for dyn ModuleNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleNode")
            .field("config", &self.config())
            .finish()
    }
}

/// Allow boxed modules to be used as modules (for dynamic dispatch)
impl ModuleNode for Box<dyn ModuleNode> {
    fn config(&self) -> ModuleConfig {
        (**self).config()
    }

    fn process(&mut self, io: &mut PortIo, ctx: &ProcessCtx) {
        (**self).process(io, ctx)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctx_sample_time_matches_rate() {
        let ctx = ProcessCtx::from_rate(48_000.0);
        assert!((ctx.sample_time - 1.0 / 48_000.0).abs() < 1e-12);
    }
}
