use sliding_ui_graphics::Point;

use super::EdgeFlags;
use crate::velocity_tracker::PointerVelocityTracker;

/// Everything the helper remembers about one pointer that is down.
#[derive(Clone, Debug)]
pub struct PointerState {
    pub(crate) initial: Point,
    pub(crate) down_time_ms: i64,
    pub(crate) last: Point,
    pub(crate) edges_touched: EdgeFlags,
    pub(crate) edge_drags_in_progress: EdgeFlags,
    pub(crate) edge_drags_locked: EdgeFlags,
    pub(crate) velocity: PointerVelocityTracker,
}

impl PointerState {
    pub(crate) fn new(position: Point, uptime_ms: i64, edges_touched: EdgeFlags) -> Self {
        let mut velocity = PointerVelocityTracker::new();
        velocity.add_position(uptime_ms, position);
        Self {
            initial: position,
            down_time_ms: uptime_ms,
            last: position,
            edges_touched,
            edge_drags_in_progress: EdgeFlags::NONE,
            edge_drags_locked: EdgeFlags::NONE,
            velocity,
        }
    }

    /// Where the pointer went down.
    pub fn initial_position(&self) -> Point {
        self.initial
    }

    /// True when `event` is the down that started this pointer.
    pub(crate) fn is_press(&self, position: Point, uptime_ms: i64) -> bool {
        self.initial == position && self.down_time_ms == uptime_ms
    }

    pub fn last_position(&self) -> Point {
        self.last
    }

    /// Edges the pointer was near when it went down.
    pub fn edges_touched(&self) -> EdgeFlags {
        self.edges_touched
    }

    pub fn edge_drags_in_progress(&self) -> EdgeFlags {
        self.edge_drags_in_progress
    }

    pub fn edge_drags_locked(&self) -> EdgeFlags {
        self.edge_drags_locked
    }
}
