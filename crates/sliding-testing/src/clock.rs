use sliding_ui::FrameClock;

/// Frame length used by [`ManualFrameClock::new`], roughly 60 Hz.
pub const FRAME_NANOS: u64 = 16_000_000;

/// Deterministic frame clock: every frame is exactly one step after the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualFrameClock {
    now_nanos: u64,
    step_nanos: u64,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::with_step(FRAME_NANOS)
    }

    pub fn with_step(step_nanos: u64) -> Self {
        Self {
            now_nanos: 0,
            step_nanos,
        }
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    pub fn advance(&mut self, nanos: u64) {
        self.now_nanos += nanos;
    }
}

impl Default for ManualFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for ManualFrameClock {
    fn frame_time_nanos(&mut self) -> u64 {
        self.now_nanos += self.step_nanos;
        self.now_nanos
    }
}
