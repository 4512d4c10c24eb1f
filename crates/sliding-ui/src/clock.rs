use web_time::Instant;

/// Source of frame timestamps for [`SliderPanel::compute_scroll`](crate::SliderPanel::compute_scroll).
pub trait FrameClock {
    /// Timestamp of the frame about to be drawn, in nanoseconds.
    fn frame_time_nanos(&mut self) -> u64;
}

/// Wall-clock frame times for hosts without a vsync timestamp.
#[derive(Clone, Copy, Debug)]
pub struct SystemFrameClock {
    origin: Instant,
}

impl SystemFrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemFrameClock {
    fn frame_time_nanos(&mut self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}
