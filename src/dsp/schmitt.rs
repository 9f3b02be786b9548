/*
Schmitt Trigger Edge Detection
==============================

This module turns a noisy analog clock voltage into clean, discrete "tick"
events. One tick per rising edge, no matter how messy the input waveform is.

Vocabulary
----------

  edge          A transition of the input signal. Rising = low to high,
                falling = high to low. Clock consumers care about rising
                edges only.

  threshold     A voltage level the signal must cross for the detector to
                change state.

  hysteresis    Using TWO thresholds instead of one. The signal must rise
                above the high threshold to arm, then fall below the low
                threshold to disarm. The gap between them rejects noise.

  normalized    Input to the detector after rescaling the raw voltage range
                into 0..1. This crate maps 0.1 V -> 0.0 and 2.0 V -> 1.0,
                so any gate or trigger standard (5 V, 10 V, even 2 V logic)
                crosses both thresholds.


Why Two Thresholds?
-------------------

With a single threshold, a signal hovering near it chatters:

    single threshold ───────╱╲╱╲╱╲──────   -> dozens of false edges

With hysteresis, the detector latches until the signal commits to the
opposite rail:

    high (1.0) ────────────────╱───────────
                              ╱      ← must reach 1.0 to fire
    low  (0.0) ──────╲       ╱
                      ╲_____╱ ← must fall to 0.0 to re-arm

State machine:

      ┌─────┐  input >= high   ┌──────┐
      │ Low │ ───────────────→ │ High │     (fires once on this transition)
      └─────┘                  └──────┘
         ↑    input <= low        │
         └────────────────────────┘

The detector starts in the High state. A signal that is already high when
processing begins does NOT fire; it must first fall below the low threshold
and rise again. This prevents a spurious tick at patch startup.
*/

/// Map `x` from the range `[x0, x1]` to `[y0, y1]`, extrapolating beyond
/// the endpoints. No clamping: out-of-range voltage stays out of range and
/// the hysteresis thresholds handle it.
#[inline]
pub fn rescale(x: f32, x0: f32, x1: f32, y0: f32, y1: f32) -> f32 {
    y0 + (x - x0) / (x1 - x0) * (y1 - y0)
}

/// Hysteresis edge detector over a normalized 0..1 signal.
pub struct SchmittTrigger {
    high: bool,
    low_threshold: f32,
    high_threshold: f32,
}

impl SchmittTrigger {
    pub fn new() -> Self {
        Self {
            high: true,
            low_threshold: 0.0,
            high_threshold: 1.0,
        }
    }

    /// Detector with custom thresholds. `low` must be below `high`.
    pub fn with_thresholds(low: f32, high: f32) -> Self {
        debug_assert!(low < high);
        Self {
            high: true,
            low_threshold: low,
            high_threshold: high,
        }
    }

    /// Feed one sample of the normalized signal. Returns true exactly once
    /// per complete low-to-high transition.
    pub fn process(&mut self, value: f32) -> bool {
        if self.high {
            if value <= self.low_threshold {
                self.high = false;
            }
        } else if value >= self.high_threshold {
            self.high = true;
            return true;
        }
        false
    }

    /// Current latched state (true = armed high).
    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Return to the startup state (armed high, will not fire until the
    /// signal drops low and rises again).
    pub fn reset(&mut self) {
        self.high = true;
    }
}

impl Default for SchmittTrigger {
    fn default() -> Self {
        Self::new()
    }
}
