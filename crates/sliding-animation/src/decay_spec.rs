//! Decay physics for fling motion.
//!
//! Implements the Android scroller fling spline and the friction/density
//! based calculator that turns a release velocity into a travel distance and
//! duration.

use std::sync::LazyLock;

const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

/// Number of samples in the spline lookup table
const NB_SAMPLES: usize = 100;

/// Distance coefficients sampled at evenly spaced times.
static SPLINE_POSITIONS: LazyLock<[f32; NB_SAMPLES + 1]> = LazyLock::new(|| {
    let mut positions = [0.0f32; NB_SAMPLES + 1];
    let mut x_min = 0.0f32;

    for (i, slot) in positions.iter_mut().enumerate().take(NB_SAMPLES) {
        let alpha = i as f32 / NB_SAMPLES as f32;

        // Bisect for x such that bezier(x) = alpha
        let mut x_max = 1.0f32;
        let (x, coef) = loop {
            let x_mid = x_min + (x_max - x_min) / 2.0;
            let c = 3.0 * x_mid * (1.0 - x_mid);
            let tx = c * ((1.0 - x_mid) * P1 + x_mid * P2) + x_mid * x_mid * x_mid;
            if (tx - alpha).abs() < 1e-5 {
                break (x_mid, c);
            }
            if tx > alpha {
                x_max = x_mid;
            } else {
                x_min = x_mid;
            }
        };
        *slot = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
    }

    positions[NB_SAMPLES] = 1.0;
    positions
});

/// Result of sampling the fling spline.
#[derive(Debug, Clone, Copy)]
pub struct FlingResult {
    /// Fraction of the total distance traveled (0.0 to 1.0).
    pub distance_coefficient: f32,
    /// Instantaneous slope of the distance curve.
    pub velocity_coefficient: f32,
}

/// The Android scroller fling spline.
pub struct FlingSpline;

impl FlingSpline {
    /// Sample the spline at a given time fraction (0.0 to 1.0).
    pub fn fling_position(time: f32) -> FlingResult {
        let clamped_time = time.clamp(0.0, 1.0);
        let index = (NB_SAMPLES as f32 * clamped_time) as usize;

        if index >= NB_SAMPLES {
            return FlingResult {
                distance_coefficient: 1.0,
                velocity_coefficient: 0.0,
            };
        }

        let t_inf = index as f32 / NB_SAMPLES as f32;
        let t_sup = (index + 1) as f32 / NB_SAMPLES as f32;
        let d_inf = SPLINE_POSITIONS[index];
        let d_sup = SPLINE_POSITIONS[index + 1];
        let velocity = (d_sup - d_inf) / (t_sup - t_inf);
        FlingResult {
            distance_coefficient: d_inf + (clamped_time - t_inf) * velocity,
            velocity_coefficient: velocity,
        }
    }

    /// Time fraction at which the spline has covered `distance` of its travel.
    ///
    /// Inverse of [`FlingSpline::fling_position`]; used to cut a fling short
    /// when it would cross a bound.
    pub fn time_for_distance(distance: f32) -> f32 {
        if distance <= 0.0 {
            return 0.0;
        }
        if distance >= 1.0 {
            return 1.0;
        }
        let mut low = 0.0f32;
        let mut high = 1.0f32;
        for _ in 0..32 {
            let mid = (low + high) / 2.0;
            if Self::fling_position(mid).distance_coefficient < distance {
                low = mid;
            } else {
                high = mid;
            }
        }
        high
    }

    fn deceleration(velocity: f32, friction: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64 / friction as f64).ln()
    }
}

/// Earth's gravity in SI units (m/s²)
const GRAVITY_EARTH: f32 = 9.80665;
const INCHES_PER_METER: f32 = 39.37;
/// (ln(0.78) / ln(0.9)).abs()
const DECELERATION_RATE: f32 = 2.358_201_6;

fn compute_deceleration(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * friction
}

/// Distance and duration of one fling.
#[derive(Debug, Clone, Copy)]
pub struct FlingInfo {
    /// Initial velocity in px/sec.
    pub initial_velocity: f32,
    /// Unsigned distance that will be traveled.
    pub distance: f32,
    /// Total duration in milliseconds.
    pub duration: i64,
}

impl FlingInfo {
    /// Signed displacement at the given time (in milliseconds).
    pub fn position(&self, time_ms: i64) -> f32 {
        let fraction = if self.duration > 0 {
            time_ms as f32 / self.duration as f32
        } else {
            1.0
        };
        self.distance
            * self.initial_velocity.signum()
            * FlingSpline::fling_position(fraction).distance_coefficient
    }

    pub fn is_finished(&self, time_ms: i64) -> bool {
        time_ms >= self.duration
    }
}

/// Turns release velocities into fling distance and duration.
#[derive(Debug, Clone, Copy)]
pub struct FlingCalculator {
    friction: f32,
    magic_physical_coefficient: f32,
}

impl FlingCalculator {
    /// Default scroll friction.
    pub const DEFAULT_FRICTION: f32 = 0.015;

    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            magic_physical_coefficient: compute_deceleration(0.84, density),
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        FlingSpline::deceleration(velocity, self.friction * self.magic_physical_coefficient)
    }

    /// Duration of a fling in milliseconds.
    pub fn fling_duration(&self, velocity: f32) -> i64 {
        if velocity == 0.0 {
            return 0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        (1000.0 * (l / decel_minus_one).exp()) as i64
    }

    /// Unsigned distance a fling will travel.
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        if velocity == 0.0 {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        self.friction
            * self.magic_physical_coefficient
            * (DECELERATION_RATE as f64 / decel_minus_one * l).exp() as f32
    }

    pub fn fling_info(&self, velocity: f32) -> FlingInfo {
        FlingInfo {
            initial_velocity: velocity,
            distance: self.fling_distance(velocity),
            duration: self.fling_duration(velocity),
        }
    }
}
