//! Direction-specific drag rules.
//!
//! Every [`Direction`] reduces to an axis plus the sign(s) the content may
//! move in along it, so a single [`DirectionPolicy`] covers all six.

use sliding_ui_graphics::{IntOffset, IntSize, Point};

use crate::direction::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Sign of the offsets that uncover the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reveal {
    /// Offsets in `[0, dimension]`.
    Positive,
    /// Offsets in `[-dimension, 0]`.
    Negative,
    /// Offsets in `[-dimension, dimension]`.
    Both,
}

/// Release rules, resolved from the panel config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseThresholds {
    /// Main-axis speed (px/sec) above which a release flings open.
    pub velocity: f32,
    /// Fraction of the dimension past which a slow release settles open.
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectionPolicy {
    pub axis: Axis,
    pub reveal: Reveal,
}

impl DirectionPolicy {
    pub const fn for_direction(direction: Direction) -> Self {
        let (axis, reveal) = match direction {
            Direction::Left => (Axis::Horizontal, Reveal::Positive),
            Direction::Right => (Axis::Horizontal, Reveal::Negative),
            Direction::Top => (Axis::Vertical, Reveal::Positive),
            Direction::Bottom => (Axis::Vertical, Reveal::Negative),
            Direction::Vertical => (Axis::Vertical, Reveal::Both),
            Direction::Horizontal => (Axis::Horizontal, Reveal::Both),
        };
        Self { axis, reveal }
    }

    /// Surface extent along the drag axis.
    pub fn dimension(&self, surface: IntSize) -> i32 {
        let dimension = match self.axis {
            Axis::Horizontal => surface.width,
            Axis::Vertical => surface.height,
        };
        dimension.max(0)
    }

    /// Legal main-axis offsets, inclusive.
    pub fn bounds(&self, surface: IntSize) -> (i32, i32) {
        let dimension = self.dimension(surface);
        match self.reveal {
            Reveal::Positive => (0, dimension),
            Reveal::Negative => (-dimension, 0),
            Reveal::Both => (-dimension, dimension),
        }
    }

    pub fn clamp(&self, offset: i32, surface: IntSize) -> i32 {
        let (min, max) = self.bounds(surface);
        offset.clamp(min, max)
    }

    /// Horizontal and vertical drag ranges reported to the drag helper.
    pub fn drag_ranges(&self, surface: IntSize) -> (i32, i32) {
        let dimension = self.dimension(surface);
        match self.axis {
            Axis::Horizontal => (dimension, 0),
            Axis::Vertical => (0, dimension),
        }
    }

    pub fn main_offset(&self, offset: IntOffset) -> i32 {
        match self.axis {
            Axis::Horizontal => offset.x,
            Axis::Vertical => offset.y,
        }
    }

    pub fn offset_for(&self, main: i32) -> IntOffset {
        match self.axis {
            Axis::Horizontal => IntOffset::new(main, 0),
            Axis::Vertical => IntOffset::new(0, main),
        }
    }

    /// Splits a release velocity into (main axis, cross axis).
    pub fn split_velocity(&self, xvel: f32, yvel: f32) -> (f32, f32) {
        match self.axis {
            Axis::Horizontal => (xvel, yvel),
            Axis::Vertical => (yvel, xvel),
        }
    }

    /// Fraction of the surface uncovered, 0 at rest and 1 fully revealed.
    /// A zero-sized surface reads as 0.
    pub fn percent(&self, offset: i32, surface: IntSize) -> f32 {
        let dimension = self.dimension(surface);
        if dimension == 0 {
            return 0.0;
        }
        (offset.unsigned_abs() as f32 / dimension as f32).clamp(0.0, 1.0)
    }

    /// Main-axis offset the content settles at after a release at `offset`.
    ///
    /// A release faster than the velocity threshold opens in the direction of
    /// motion unless the cross-axis speed also exceeds it. Otherwise the
    /// content opens once it is past the distance threshold and closes when
    /// it is not, or when it is moving back towards rest.
    pub fn settle_target(
        &self,
        offset: i32,
        velocity: f32,
        cross_velocity: f32,
        surface: IntSize,
        thresholds: ReleaseThresholds,
    ) -> i32 {
        let dimension = self.dimension(surface);
        let threshold = (dimension as f32 * thresholds.distance) as i32;
        let flung = velocity.abs() > thresholds.velocity && cross_velocity.abs() <= thresholds.velocity;
        let past_positive = offset > threshold;
        let past_negative = offset < -threshold;

        let open_positive = match self.reveal {
            Reveal::Positive | Reveal::Both if velocity > 0.0 => flung || past_positive,
            Reveal::Positive | Reveal::Both if velocity == 0.0 => past_positive,
            _ => false,
        };
        let open_negative = match self.reveal {
            Reveal::Negative | Reveal::Both if velocity < 0.0 => flung || past_negative,
            Reveal::Negative | Reveal::Both if velocity == 0.0 => past_negative,
            _ => false,
        };

        if open_positive {
            dimension
        } else if open_negative {
            -dimension
        } else {
            0
        }
    }

    /// Whether `position` lies in the band of thickness
    /// `edge_fraction * dimension` along an edge the content opens from.
    pub fn edge_hit(&self, position: Point, surface: IntSize, edge_fraction: f32) -> bool {
        let dimension = self.dimension(surface) as f32;
        let band = edge_fraction * dimension;
        let along = match self.axis {
            Axis::Horizontal => position.x,
            Axis::Vertical => position.y,
        };
        let near_start = along < band;
        let near_end = along > dimension - band;
        match self.reveal {
            Reveal::Positive => near_start,
            Reveal::Negative => near_end,
            Reveal::Both => near_start || near_end,
        }
    }
}
