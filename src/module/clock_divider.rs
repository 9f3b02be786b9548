use crate::{
    dsp::divider::{ClockDividerCore, DIVISORS},
    module::{
        node::{ModuleConfig, ModuleNode, ProcessCtx},
        ports::PortIo,
        registry::ModuleDescriptor,
    },
};

/*
Clock Divider Module
====================

The host-facing wrapper around `ClockDividerCore`. One clock input, four
divided trigger outputs:

    CLOCK ──→ ┌──────────────┐ ──→ /2
              │ ClockDivider │ ──→ /4
              │              │ ──→ /8
              └──────────────┘ ──→ /16

All behavior lives in the core; this layer only moves voltages between the
port banks and the core's per-sample call.
*/

/// Input port indices.
pub const CLOCK_INPUT: usize = 0;

/// Output port indices, one per division ratio.
pub const DIV2_OUTPUT: usize = 0;
pub const DIV4_OUTPUT: usize = 1;
pub const DIV8_OUTPUT: usize = 2;
pub const DIV16_OUTPUT: usize = 3;

pub struct ClockDividerModule {
    core: ClockDividerCore,
}

impl ClockDividerModule {
    pub fn new() -> Self {
        Self {
            core: ClockDividerCore::new(),
        }
    }

    /// Descriptor for registering this module with a host registry.
    pub fn descriptor() -> ModuleDescriptor {
        ModuleDescriptor::new("clock-divider", "Clock Divider", Self::new)
    }

    /// Current edge count (exposed for host UIs and tests).
    pub fn count(&self) -> u32 {
        self.core.count()
    }
}

impl Default for ClockDividerModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleNode for ClockDividerModule {
    fn config(&self) -> ModuleConfig {
        ModuleConfig {
            inputs: 1,
            outputs: DIVISORS.len(),
            params: 0,
            lights: 0,
        }
    }

    fn process(&mut self, io: &mut PortIo, ctx: &ProcessCtx) {
        let clock = io.input(CLOCK_INPUT);
        let out = self.core.process(clock, ctx.sample_time);
        io.set_output(DIV2_OUTPUT, out[0]);
        io.set_output(DIV4_OUTPUT, out[1]);
        io.set_output(DIV8_OUTPUT, out[2]);
        io.set_output(DIV16_OUTPUT, out[3]);
    }

    fn reset(&mut self) {
        self.core.reset();
    }
}
