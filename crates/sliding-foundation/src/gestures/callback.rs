use super::{DragHelper, DragState, EdgeFlags, ViewId};
use crate::input::PointerId;

/// Policy and notifications for a [`DragHelper`].
///
/// The helper is passed in to the hooks that may need to query it
/// ([`try_capture_view`](Self::try_capture_view)) or drive it
/// ([`on_view_released`](Self::on_view_released)).
pub trait DragCallback {
    fn on_view_drag_state_changed(&mut self, _helper: &DragHelper, _state: DragState) {}

    /// `left`/`top` are the view's new offset, `dx`/`dy` how far it moved.
    fn on_view_position_changed(
        &mut self,
        _view: ViewId,
        _left: i32,
        _top: i32,
        _dx: i32,
        _dy: i32,
    ) {
    }

    fn on_view_captured(&mut self, _view: ViewId, _pointer: PointerId) {}

    /// Called once when the captured view is let go. Velocities are in px/sec,
    /// zeroed below the helper's minimum and capped at its maximum.
    ///
    /// This is the only place [`DragHelper::settle_captured_view_at`] and
    /// [`DragHelper::fling_captured_view`] may be called. If neither is, the
    /// view stays where it is and the helper goes idle.
    fn on_view_released(&mut self, _helper: &mut DragHelper, _view: ViewId, _xvel: f32, _yvel: f32) {
    }

    /// A pointer went down near one or more tracked edges with nothing captured.
    fn on_edge_touched(&mut self, _edges: EdgeFlags, _pointer: PointerId) {}

    /// Asked when an edge drag starts off mostly perpendicular to the edge.
    /// Returning true ignores that edge for the rest of the pointer's life.
    fn on_edge_lock(&mut self, _edge: EdgeFlags) -> bool {
        false
    }

    fn on_edge_drag_started(&mut self, _edges: EdgeFlags, _pointer: PointerId) {}

    /// Maps a hit-test position (0 is bottom-most) to a child index.
    fn ordered_child_index(&self, index: usize) -> usize {
        index
    }

    /// A positive range makes the view draggable on that axis and scales
    /// settle timing.
    fn view_horizontal_drag_range(&self, _view: ViewId) -> i32 {
        0
    }

    fn view_vertical_drag_range(&self, _view: ViewId) -> i32 {
        0
    }

    fn try_capture_view(&mut self, helper: &DragHelper, view: ViewId, pointer: PointerId) -> bool;

    /// Returns the allowed left edge for a requested `left`.
    fn clamp_view_position_horizontal(&self, _view: ViewId, _left: i32, _dx: i32) -> i32 {
        0
    }

    fn clamp_view_position_vertical(&self, _view: ViewId, _top: i32, _dy: i32) -> i32 {
        0
    }
}
