use rtrb::{Consumer, Producer, RingBuffer};

/*
Pulse Probe
===========

A single-producer single-consumer event channel for watching divider
pulses from outside the audio thread. The audio side (`PulseProbe`) pushes
one event per rising output transition; the observer side (`PulseMonitor`)
drains them at its leisure.

Both halves are lock-free and allocation-free after construction, so the
probe is safe to call from a realtime callback. When the ring buffer is
full, `record` drops the event and counts it rather than blocking; a UI
that cares can surface the dropped count.
*/

/// One rising transition on a module output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PulseEvent {
    /// Output port index that went high.
    pub port: usize,
    /// Absolute frame position of the transition.
    pub frame: u64,
}

/// Audio-thread half: records events.
pub struct PulseProbe {
    tx: Producer<PulseEvent>,
    dropped: u64,
}

/// Observer half: drains events.
pub struct PulseMonitor {
    rx: Consumer<PulseEvent>,
}

impl PulseProbe {
    /// Create a connected probe/monitor pair with room for `capacity`
    /// in-flight events.
    pub fn channel(capacity: usize) -> (PulseProbe, PulseMonitor) {
        let (tx, rx) = RingBuffer::new(capacity);
        (PulseProbe { tx, dropped: 0 }, PulseMonitor { rx })
    }

    /// Record a rising transition. Never blocks; drops on overflow.
    pub fn record(&mut self, port: usize, frame: u64) {
        if self.tx.push(PulseEvent { port, frame }).is_err() {
            self.dropped += 1;
        }
    }

    /// Events lost to ring buffer overflow since construction.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl PulseMonitor {
    pub fn pop(&mut self) -> Option<PulseEvent> {
        self.rx.pop().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_cross_the_channel_in_order() {
        let (mut probe, mut monitor) = PulseProbe::channel(8);
        probe.record(0, 10);
        probe.record(3, 11);

        assert_eq!(monitor.pop(), Some(PulseEvent { port: 0, frame: 10 }));
        assert_eq!(monitor.pop(), Some(PulseEvent { port: 3, frame: 11 }));
        assert_eq!(monitor.pop(), None);
    }

    #[test]
    fn overflow_drops_instead_of_blocking() {
        let (mut probe, mut monitor) = PulseProbe::channel(2);
        probe.record(0, 0);
        probe.record(0, 1);
        probe.record(0, 2); // no room

        assert_eq!(probe.dropped(), 1);
        assert_eq!(monitor.pop().map(|e| e.frame), Some(0));
        assert_eq!(monitor.pop().map(|e| e.frame), Some(1));
        assert_eq!(monitor.pop(), None);
    }
}
