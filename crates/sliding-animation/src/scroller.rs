//! Frame-driven scroll simulation.
//!
//! A [`Scroller`] owns no timer. The host advances it by calling
//! [`Scroller::compute_scroll_offset`] with the current frame timestamp; the
//! first call after a scroll starts latches the start time, so a scroll begun
//! inside an input callback starts moving on the next rendered frame.

use crate::{Easing, FlingCalculator, FlingSpline};

/// Duration of the eased return when a fling starts outside its bounds.
pub const SPRING_BACK_DURATION_MS: i64 = 250;

#[derive(Clone, Copy, Debug, PartialEq)]
enum AxisMotion {
    Eased,
    Spline {
        /// Signed distance of the unbounded fling.
        distance: f32,
        /// Duration of the unbounded fling; the axis may stop earlier.
        spline_duration_ms: i64,
    },
}

#[derive(Clone, Copy, Debug)]
struct AxisScroller {
    start: i32,
    final_pos: i32,
    current: i32,
    duration_ms: i64,
    motion: AxisMotion,
}

impl AxisScroller {
    fn at_rest(position: i32) -> Self {
        Self {
            start: position,
            final_pos: position,
            current: position,
            duration_ms: 0,
            motion: AxisMotion::Eased,
        }
    }

    fn eased(start: i32, delta: i32, duration_ms: i64) -> Self {
        Self {
            start,
            final_pos: start + delta,
            current: start,
            duration_ms,
            motion: AxisMotion::Eased,
        }
    }

    fn fling(
        start: i32,
        velocity: f32,
        min: i32,
        max: i32,
        calculator: &FlingCalculator,
    ) -> Self {
        if start < min || start > max {
            let target = start.clamp(min, max);
            return Self::eased(start, target - start, SPRING_BACK_DURATION_MS);
        }
        if velocity == 0.0 {
            return Self::at_rest(start);
        }

        let info = calculator.fling_info(velocity);
        let distance = info.distance * velocity.signum();
        let unbounded = start + distance.round() as i32;
        let final_pos = unbounded.clamp(min, max);
        let mut duration_ms = info.duration;
        if final_pos != unbounded && distance != 0.0 {
            let fraction = (final_pos - start) as f32 / distance;
            duration_ms = (FlingSpline::time_for_distance(fraction) * info.duration as f32) as i64;
        }

        Self {
            start,
            final_pos,
            current: start,
            duration_ms,
            motion: AxisMotion::Spline {
                distance,
                spline_duration_ms: info.duration,
            },
        }
    }

    fn update(&mut self, elapsed_ms: i64, easing: Easing) {
        if elapsed_ms >= self.duration_ms {
            self.current = self.final_pos;
            return;
        }
        self.current = match self.motion {
            AxisMotion::Eased => {
                let fraction = easing.transform(elapsed_ms as f32 / self.duration_ms as f32);
                self.start + (fraction * (self.final_pos - self.start) as f32).round() as i32
            }
            AxisMotion::Spline {
                distance,
                spline_duration_ms,
            } => {
                let fraction = elapsed_ms as f32 / spline_duration_ms.max(1) as f32;
                let travelled =
                    (distance * FlingSpline::fling_position(fraction).distance_coefficient).round()
                        as i32;
                let low = self.start.min(self.final_pos);
                let high = self.start.max(self.final_pos);
                (self.start + travelled).clamp(low, high)
            }
        };
    }
}

/// Two-axis scroll simulation with eased and fling modes.
#[derive(Clone, Debug)]
pub struct Scroller {
    x: AxisScroller,
    y: AxisScroller,
    easing: Easing,
    calculator: FlingCalculator,
    start_frame_nanos: Option<u64>,
    finished: bool,
}

impl Scroller {
    /// Creates a finished scroller using quintic ease-out for eased scrolls.
    pub fn new(density: f32) -> Self {
        Self::with_easing(density, Easing::QuinticEaseOut)
    }

    pub fn with_easing(density: f32, easing: Easing) -> Self {
        Self {
            x: AxisScroller::at_rest(0),
            y: AxisScroller::at_rest(0),
            easing,
            calculator: FlingCalculator::with_density(density),
            start_frame_nanos: None,
            finished: true,
        }
    }

    /// Starts an eased scroll by `(dx, dy)` lasting `duration_ms`.
    pub fn start_scroll(&mut self, start_x: i32, start_y: i32, dx: i32, dy: i32, duration_ms: i64) {
        self.x = AxisScroller::eased(start_x, dx, duration_ms);
        self.y = AxisScroller::eased(start_y, dy, duration_ms);
        self.start_frame_nanos = None;
        self.finished = false;
    }

    /// Starts a decay fling bounded by `[min_x, max_x]` x `[min_y, max_y]`.
    #[allow(clippy::too_many_arguments)]
    pub fn fling(
        &mut self,
        start_x: i32,
        start_y: i32,
        velocity_x: f32,
        velocity_y: f32,
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    ) {
        self.x = AxisScroller::fling(start_x, velocity_x, min_x, max_x, &self.calculator);
        self.y = AxisScroller::fling(start_y, velocity_y, min_y, max_y, &self.calculator);
        self.start_frame_nanos = None;
        self.finished = false;
        log::trace!(
            "fling from ({start_x}, {start_y}) to ({}, {}) over {}ms",
            self.x.final_pos,
            self.y.final_pos,
            self.duration_ms()
        );
    }

    /// Advances the simulation to `frame_time_nanos`.
    ///
    /// Returns false once the scroller had already finished. The call that
    /// reaches the end of the simulation still returns true and leaves the
    /// current position at the final position.
    pub fn compute_scroll_offset(&mut self, frame_time_nanos: u64) -> bool {
        if self.finished {
            return false;
        }
        let start = *self.start_frame_nanos.get_or_insert(frame_time_nanos);
        let elapsed_ms = (frame_time_nanos.saturating_sub(start) / 1_000_000) as i64;
        if elapsed_ms < self.duration_ms() {
            self.x.update(elapsed_ms, self.easing);
            self.y.update(elapsed_ms, self.easing);
        } else {
            self.abort_animation();
        }
        true
    }

    /// Jumps to the final position and finishes.
    pub fn abort_animation(&mut self) {
        self.x.current = self.x.final_pos;
        self.y.current = self.y.final_pos;
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn curr_x(&self) -> i32 {
        self.x.current
    }

    pub fn curr_y(&self) -> i32 {
        self.y.current
    }

    pub fn final_x(&self) -> i32 {
        self.x.final_pos
    }

    pub fn final_y(&self) -> i32 {
        self.y.final_pos
    }

    /// Length of the longer axis motion.
    pub fn duration_ms(&self) -> i64 {
        self.x.duration_ms.max(self.y.duration_ms)
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
