use crate::{
    io::{VoltageInput, VoltageOutput},
    module::{ModuleConfig, ModuleNode, PortIo, ProcessCtx},
};

#[cfg(feature = "rtrb")]
use crate::io::probe::PulseProbe;

/*
Host Runner
===========

A minimal stand-in for a modular host: owns one module instance, calls its
per-sample `process` in a loop, and moves voltages between caller-provided
blocks and the module's port banks. Tests and offline demos use it to
drive a module exactly the way a realtime host would, one sample at a
time, without an audio device.

The runner also doubles as the attachment point for a `PulseProbe`: when
one is attached, every output transition from idle to trigger-high is
recorded with its absolute frame position.
*/

pub struct HostRunner {
    module: Box<dyn ModuleNode>,
    io: PortIo,
    ctx: ProcessCtx,
    config: ModuleConfig,
    frame_counter: u64,
    last_out: Vec<f32>,
    #[cfg(feature = "rtrb")]
    probe: Option<PulseProbe>,
}

impl HostRunner {
    pub fn new(module: Box<dyn ModuleNode>, sample_rate: f32) -> Self {
        let config = module.config();
        Self {
            module,
            io: PortIo::for_config(&config),
            ctx: ProcessCtx::from_rate(sample_rate),
            config,
            frame_counter: 0,
            last_out: vec![0.0; config.outputs],
            #[cfg(feature = "rtrb")]
            probe: None,
        }
    }

    pub fn config(&self) -> ModuleConfig {
        self.config
    }

    /// Frames processed since construction.
    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    /// Record output rising transitions into `probe` from now on.
    #[cfg(feature = "rtrb")]
    pub fn attach_probe(&mut self, probe: PulseProbe) {
        self.probe = Some(probe);
    }

    /// Drive the module for one block. Output buffers are sized to the
    /// block length, one buffer per declared output port. The block length
    /// is the longest input buffer (0 V inputs alone make no block).
    pub fn process_block(&mut self, input: &VoltageInput, output: &mut VoltageOutput) {
        let frames = input.ports.iter().map(|p| p.len()).max().unwrap_or(0);

        output.ports.resize(self.config.outputs, Vec::new());
        for port in &mut output.ports {
            port.clear();
            port.resize(frames, 0.0);
        }

        for frame in 0..frames {
            for idx in 0..self.config.inputs {
                let volts = input
                    .ports
                    .get(idx)
                    .and_then(|p| p.get(frame))
                    .copied()
                    .unwrap_or(0.0);
                self.io.set_input(idx, volts);
            }

            self.module.process(&mut self.io, &self.ctx);

            for idx in 0..self.config.outputs {
                let volts = self.io.output(idx);
                output.ports[idx][frame] = volts;

                #[cfg(feature = "rtrb")]
                if let Some(probe) = &mut self.probe {
                    if volts > 0.0 && self.last_out[idx] <= 0.0 {
                        probe.record(idx, self.frame_counter);
                    }
                }
                self.last_out[idx] = volts;
            }

            self.frame_counter += 1;
        }
    }

    /// Reset the module and the runner's bookkeeping.
    pub fn reset(&mut self) {
        self.module.reset();
        self.io.clear();
        self.frame_counter = 0;
        self.last_out.fill(0.0);
    }
}
