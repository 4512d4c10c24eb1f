//! Shared gesture thresholds.
//!
//! Distances and velocities are in logical pixels; the drag helper scales
//! them by the display density it is created with.

/// Distance a pointer must travel from its press position before the touch
/// counts as a drag. Matches the usual 8dp platform touch slop.
pub const TOUCH_SLOP: f32 = 8.0;

/// Thickness of the band along each container edge that tags a press as an
/// edge touch.
pub const EDGE_SIZE: f32 = 20.0;

/// Release velocities below this magnitude (px/sec) are reported as zero.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Release velocities are capped to this magnitude (px/sec).
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Settle duration for a full-range move released without velocity is
/// twice this value.
pub const BASE_SETTLE_DURATION_MS: i64 = 256;

/// Upper bound on any settle animation.
pub const MAX_SETTLE_DURATION_MS: i64 = 600;
