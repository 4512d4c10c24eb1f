//! Pointer velocity estimation for release and fling decisions.
//!
//! Uses the impulse strategy: the samples inside a short horizon are treated
//! as pushes on a unit mass and the accumulated kinetic energy is turned back
//! into a velocity. Pauses longer than [`ASSUME_STOPPED_MS`] cut the history,
//! so a pointer that holds still before lifting releases at zero velocity.

use sliding_ui_graphics::Point;

const HISTORY_SIZE: usize = 20;

const HORIZON_MS: i64 = 100;

/// A gap of this length between two samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    value: f32,
}

/// Velocity of a single coordinate, in units per second.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, value: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, value });
    }

    /// Returns 0.0 with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        let mut values = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.newest;
        let mut previous_time = newest.time_ms;

        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous_time - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous_time = sample.time_ms;

            values[count] = sample.value;
            times[count] = -(age as f32);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&values[..count], &times[..count]) * 1000.0
    }

    /// Same as [`calculate_velocity`](Self::calculate_velocity), capped to
    /// `max_velocity` in either direction. NaN reads as zero.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

// `values` and `times` run newest first; times are non-positive ages in ms.
fn impulse_velocity(values: &[f32], times: &[f32]) -> f32 {
    let oldest = values.len() - 1;
    let mut work = 0.0f32;
    for i in (1..=oldest).rev() {
        let dt = times[i] - times[i - 1];
        if dt == 0.0 {
            continue;
        }
        let v_curr = (values[i] - values[i - 1]) / dt;
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }
    energy_to_velocity(work)
}

#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Tracks both coordinates of one pointer.
#[derive(Clone, Debug, Default)]
pub struct PointerVelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl PointerVelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: i64, position: Point) {
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    /// Horizontal and vertical velocity in px/sec, each capped to `max_velocity`.
    pub fn velocity(&self, max_velocity: f32) -> (f32, f32) {
        (
            self.x.calculate_velocity_with_max(max_velocity),
            self.y.calculate_velocity_with_max(max_velocity),
        )
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_two_samples() {
        let mut tracker = VelocityTracker1D::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
        tracker.add_data_point(0, 10.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn steady_motion_reads_its_speed() {
        let mut tracker = VelocityTracker1D::new();
        for step in 0..5 {
            tracker.add_data_point(step * 10, step as f32 * 30.0);
        }
        let velocity = tracker.calculate_velocity();
        assert!((velocity - 3000.0).abs() < 300.0, "got {velocity}");
    }

    #[test]
    fn leftward_motion_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        for step in 0..4 {
            tracker.add_data_point(step * 10, 500.0 - step as f32 * 20.0);
        }
        assert!(tracker.calculate_velocity() < 0.0);
    }

    #[test]
    fn pause_before_last_sample_reads_as_stopped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        tracker.add_data_point(20, 200.0);
        tracker.add_data_point(80, 200.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn velocity_is_capped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 1_000.0);
        tracker.add_data_point(20, 2_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(f32::NAN), 0.0);
    }

    #[test]
    fn reset_forgets_history() {
        let mut tracker = PointerVelocityTracker::new();
        tracker.add_position(0, Point::new(0.0, 0.0));
        tracker.add_position(10, Point::new(50.0, 10.0));
        tracker.reset();
        assert_eq!(tracker.velocity(8_000.0), (0.0, 0.0));
    }

    #[test]
    fn pointer_tracker_reports_both_axes() {
        let mut tracker = PointerVelocityTracker::new();
        for step in 0..4 {
            let t = step as f32;
            tracker.add_position(step * 10, Point::new(t * 20.0, 300.0 - t * 10.0));
        }
        let (vx, vy) = tracker.velocity(8_000.0);
        assert!(vx > 0.0);
        assert!(vy < 0.0);
        assert!(vx > vy.abs());
    }
}
