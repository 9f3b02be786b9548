/*
Pulse Generator
===============

A one-shot timer that holds an output "high" for a short, fixed duration
after being triggered. Sequencers and clock utilities use these to emit
trigger pulses (typically 1 ms) that downstream modules detect reliably
regardless of their own sample rate.

Two operations:

  trigger(duration)   Arm the pulse. The remaining time becomes AT LEAST
                      `duration`; a re-trigger while already active never
                      shortens the pulse. This makes per-sample re-arming
                      idempotent: callers can trigger on every sample that
                      a condition holds without stretching or chopping the
                      output.

  process(elapsed)    Advance time. Subtracts the elapsed seconds (floored
                      at zero) and reports whether the pulse is still high
                      for this sample.

Timeline for a 1 ms pulse at 48 kHz (~48 samples):

    trigger(0.001)
    │
    ▼
    ██████████████████░░░░░░░░░░░░░
    ← 48 samples high →  low after remaining hits 0
*/

/// Retriggerable one-shot pulse timer. Remaining time is in seconds and is
/// never negative.
pub struct PulseGenerator {
    remaining: f32,
}

impl PulseGenerator {
    pub fn new() -> Self {
        Self { remaining: 0.0 }
    }

    /// Arm the pulse for at least `duration` seconds. Never shortens an
    /// already-longer pulse.
    pub fn trigger(&mut self, duration: f32) {
        if duration > self.remaining {
            self.remaining = duration;
        }
    }

    /// Advance by `elapsed` seconds. Returns true iff the pulse is still
    /// high after the decrement.
    pub fn process(&mut self, elapsed: f32) -> bool {
        self.remaining = (self.remaining - elapsed).max(0.0);
        self.remaining > 0.0
    }

    /// True while the pulse has time left.
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Drop the pulse immediately.
    pub fn reset(&mut self) {
        self.remaining = 0.0;
    }
}

impl Default for PulseGenerator {
    fn default() -> Self {
        Self::new()
    }
}
