/// Turns absolute animation-frame timestamps (ms) into frame deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous timestamp. The first call, and any
    /// timestamp that goes backwards, yields 0.
    pub fn delta(&mut self, timestamp_ms: f64) -> f64 {
        match self.last.replace(timestamp_ms) {
            Some(prev) if timestamp_ms > prev => timestamp_ms - prev,
            _ => 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
