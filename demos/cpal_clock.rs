/// Live audio demo: an internally generated gate clocks the divider, the
/// four outputs come out as click trains, and a pulse probe reports each
/// division back to the main thread.
///
/// Run with: cargo run --example cpal_clock
#[cfg(feature = "rtrb")]
fn main() {
    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use divider_dsp::io::probe::PulseProbe;
    use divider_dsp::module::{
        clock_divider::CLOCK_INPUT, ClockDividerModule, ModuleNode, PortIo, ProcessCtx,
    };

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .expect("no default output device available");
    let config = device
        .default_output_config()
        .expect("failed to fetch default output config");

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;

    println!("=== Clock Divider ===");
    println!("Sample rate: {} Hz", sample_rate);
    println!("Clock: 8 Hz gate, outputs at /2 /4 /8 /16");
    println!("Playing for 10 s...\n");

    let (mut probe, mut monitor) = PulseProbe::channel(1024);

    let mut module = ClockDividerModule::new();
    let mut io = PortIo::for_config(&module.config());
    let ctx = ProcessCtx::from_rate(sample_rate);

    // Gains per output: deeper divisions click louder.
    let gains = [0.08, 0.12, 0.18, 0.25];
    let clock_period = (sample_rate / 8.0) as u64;
    let mut frame: u64 = 0;
    let mut last_out = [0.0f32; 4];

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                for frame_samples in data.chunks_mut(channels) {
                    let gate = if frame % clock_period < clock_period / 2 {
                        10.0
                    } else {
                        0.0
                    };
                    io.set_input(CLOCK_INPUT, gate);
                    module.process(&mut io, &ctx);

                    let mut sample = 0.0;
                    for port in 0..4 {
                        let volts = io.output(port);
                        if volts > 0.0 && last_out[port] <= 0.0 {
                            probe.record(port, frame);
                        }
                        last_out[port] = volts;
                        sample += volts / 10.0 * gains[port];
                    }

                    for channel in frame_samples.iter_mut() {
                        *channel = sample;
                    }
                    frame += 1;
                }
            },
            |err| eprintln!("Audio error: {}", err),
            None,
        )
        .expect("failed to build output stream");

    stream.play().expect("failed to start stream");

    let labels = ["/2", "/4", "/8", "/16"];
    let start = std::time::Instant::now();
    while start.elapsed().as_secs() < 10 {
        while let Some(event) = monitor.pop() {
            println!("{:>4} pulse at frame {}", labels[event.port], event.frame);
        }
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
}

#[cfg(not(feature = "rtrb"))]
fn main() {
    eprintln!("Build with the default `rtrb` feature to run this example.");
}
