/// Offline render: drive the clock divider from a generated gate signal
/// and print where each output fired.
use divider_dsp::io::{HostRunner, VoltageInput, VoltageOutput};
use divider_dsp::module::{ClockDividerModule, ModuleRegistry};

fn main() {
    let sample_rate = 48_000.0;
    let clock_hz = 8.0;
    let seconds = 4.0;

    let mut registry = ModuleRegistry::new();
    registry
        .register(ClockDividerModule::descriptor())
        .expect("fresh registry");
    let module = registry
        .instantiate("clock-divider")
        .expect("descriptor just registered");

    println!("=== Clock Divider Offline Render ===\n");
    println!("Clock: {} Hz, {} s at {} Hz sample rate", clock_hz, seconds, sample_rate);

    // Gate waveform: high for the first half of each clock period.
    let frames = (seconds * sample_rate) as usize;
    let period = (sample_rate / clock_hz) as usize;
    let clock: Vec<f32> = (0..frames)
        .map(|i| if (i % period) < period / 2 { 10.0 } else { 0.0 })
        .collect();

    let mut runner = HostRunner::new(module, sample_rate);
    let input = VoltageInput { ports: vec![clock] };
    let mut output = VoltageOutput::default();
    runner.process_block(&input, &mut output);

    println!();
    for (port, label) in ["/2", "/4", "/8", "/16"].iter().enumerate() {
        let buf = &output.ports[port];
        let rises = (1..buf.len())
            .filter(|&i| buf[i] > 0.0 && buf[i - 1] <= 0.0)
            .count();
        // One row per output: a mark per 100 ms slice that contained a pulse.
        let slice = (sample_rate / 10.0) as usize;
        let row: String = buf
            .chunks(slice)
            .map(|c| if c.iter().any(|&v| v > 0.0) { '|' } else { '.' })
            .collect();
        println!("{:>4}  {}  ({} pulses)", label, row, rises);
    }

    println!("\nRendered {} frames", runner.frame_counter());
}
