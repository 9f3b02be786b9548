use crate::module::node::ModuleConfig;

/*
Voltage Ports
=============

Ports are the host-side wiring surface of a module: the host writes input
voltages before each `process` call and reads output voltages after it.
The banks are plain f32 vectors sized once from the module's declared
config, so all allocation happens at construction and the per-sample path
is just indexed loads and stores.

An unpatched input simply reads 0.0 V, which is what an idle gate line
carries anyway.
*/

/// Input and output voltage banks for one module instance.
#[derive(Debug, Clone)]
pub struct PortIo {
    inputs: Vec<f32>,
    outputs: Vec<f32>,
}

impl PortIo {
    /// Allocate port banks matching a module's declared config, all lines
    /// at 0.0 V.
    pub fn for_config(config: &ModuleConfig) -> Self {
        Self {
            inputs: vec![0.0; config.inputs],
            outputs: vec![0.0; config.outputs],
        }
    }

    /// Read an input voltage. Host side: write with `set_input` before the
    /// module's `process` call.
    pub fn input(&self, idx: usize) -> f32 {
        self.inputs[idx]
    }

    /// Set an input voltage (host side).
    pub fn set_input(&mut self, idx: usize, volts: f32) {
        self.inputs[idx] = volts;
    }

    /// Read an output voltage (host side, after `process`).
    pub fn output(&self, idx: usize) -> f32 {
        self.outputs[idx]
    }

    /// Write an output voltage (module side).
    pub fn set_output(&mut self, idx: usize, volts: f32) {
        self.outputs[idx] = volts;
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Zero every line (patch teardown).
    pub fn clear(&mut self) {
        self.inputs.fill(0.0);
        self.outputs.fill(0.0);
    }
}
