use crate::{
    dsp::{
        pulse::PulseGenerator,
        schmitt::{rescale, SchmittTrigger},
    },
    TRIGGER_HIGH_VOLTS, TRIGGER_LOW_VOLTS, TRIGGER_PULSE_SECS,
};

/*
Clock Divider Core
==================

Counts rising edges of an incoming clock and emits a 1 ms trigger pulse on
four outputs at 1/2, 1/4, 1/8, and 1/16 of the input rate.

Per-sample pipeline:

    clock volts ─→ rescale ─→ SchmittTrigger ─→ edge? ─→ counter += 1
                                                            │
                  counter % d == 0 for d in {2,4,8,16} ─────┘
                      │
                      ▼
                  trigger 1 ms pulse ─→ process(sample_time) ─→ 10 V / 0 V

The divisor check runs once per counter value: on the first sample after
construction (count 0 qualifies for every divisor) and on each sample that
carries a detected edge. Re-arming a pulse that is still high never
shortens it, so a divisor that qualifies on consecutive edges reads as one
continuous high stretch rather than separate pulses.

The counter wraps with a strict `> 16` comparison, faithful to the hardware
behavior this models. Both 16 and the post-wrap 0 satisfy `% 16 == 0`, so
the 1/16 output re-arms on two consecutive edges at the wrap boundary. See
the wrap tests before changing the comparison.
*/

/// Division ratios of the four outputs, in output-port order.
pub const DIVISORS: [u32; 4] = [2, 4, 8, 16];

/// Counter value above which the count resets to zero.
const COUNTER_WRAP: u32 = 16;

/// Input voltage range mapped onto the edge detector's normalized 0..1
/// scale. 0.1 V low / 2.0 V high accepts every common gate standard.
const CLOCK_LOW_VOLTS: f32 = 0.1;
const CLOCK_HIGH_VOLTS: f32 = 2.0;

/// Edge counter with inclusive wraparound at 16.
pub struct DivisionCounter {
    value: u32,
}

impl DivisionCounter {
    pub fn new() -> Self {
        Self { value: 0 }
    }

    /// Advance by one detected edge. Strict `> 16`: the counter reaches 16
    /// and resets on the edge after it.
    pub fn on_edge(&mut self) {
        self.value += 1;
        if self.value > COUNTER_WRAP {
            self.value = 0;
        }
    }

    /// Current count, always in 0..=16.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

impl Default for DivisionCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete per-sample state machine: one edge detector, one counter,
/// and one pulse generator per divisor.
pub struct ClockDividerCore {
    trigger: SchmittTrigger,
    counter: DivisionCounter,
    pulses: [PulseGenerator; DIVISORS.len()],
    // Set at construction and on every edge; cleared after the divisor
    // check so each counter value arms its outputs exactly once.
    arm_pending: bool,
}

impl ClockDividerCore {
    pub fn new() -> Self {
        Self {
            trigger: SchmittTrigger::new(),
            counter: DivisionCounter::new(),
            pulses: Default::default(),
            arm_pending: true,
        }
    }

    /// Process one sample. `clock_volts` is the raw input voltage and
    /// `sample_time` the host's sample period in seconds. Returns the four
    /// output voltages in `DIVISORS` order.
    pub fn process(&mut self, clock_volts: f32, sample_time: f32) -> [f32; DIVISORS.len()] {
        let normalized = rescale(clock_volts, CLOCK_LOW_VOLTS, CLOCK_HIGH_VOLTS, 0.0, 1.0);
        if self.trigger.process(normalized) {
            self.counter.on_edge();
            self.arm_pending = true;
        }

        let count = self.counter.value();
        let mut out = [TRIGGER_LOW_VOLTS; DIVISORS.len()];
        for (i, &divisor) in DIVISORS.iter().enumerate() {
            if self.arm_pending && count % divisor == 0 {
                self.pulses[i].trigger(TRIGGER_PULSE_SECS);
            }
            out[i] = if self.pulses[i].process(sample_time) {
                TRIGGER_HIGH_VOLTS
            } else {
                TRIGGER_LOW_VOLTS
            };
        }
        self.arm_pending = false;
        out
    }

    /// Current edge count.
    pub fn count(&self) -> u32 {
        self.counter.value()
    }

    /// Drop all pulses and return the counter and detector to their
    /// startup state.
    pub fn reset(&mut self) {
        self.trigger.reset();
        self.counter.reset();
        for pulse in &mut self.pulses {
            pulse.reset();
        }
        self.arm_pending = true;
    }
}

impl Default for ClockDividerCore {
    fn default() -> Self {
        Self::new()
    }
}
