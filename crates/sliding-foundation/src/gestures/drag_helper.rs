//! Drag capture engine.
//!
//! [`DragHelper`] consumes the raw pointer stream of a container. While
//! intercepting it only watches: it records each pointer's press position and
//! the edges it touched, and captures a child once a pointer has travelled
//! past the touch slop on an axis that child can move along. Once a child is
//! captured, [`DragHelper::process_event`] moves it with the active pointer
//! (through the callback's clamps) and, on release, hands the velocity to the
//! callback so it can pick a settle target. The settle then runs frame by
//! frame through [`DragHelper::continue_settling`].

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use sliding_animation::Scroller;
use sliding_ui_graphics::{IntOffset, Point};

use super::{DragCallback, DragContainer, EdgeFlags, PointerState, ViewId};
use crate::gesture_constants::{
    BASE_SETTLE_DURATION_MS, EDGE_SIZE, MAX_FLING_VELOCITY, MAX_SETTLE_DURATION_MS,
    MIN_FLING_VELOCITY, TOUCH_SLOP,
};
use crate::input::{PointerEvent, PointerEventKind, PointerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    /// Nothing captured, nothing animating.
    #[default]
    Idle,
    /// A child follows the active pointer.
    Dragging,
    /// A child is animating to a resting position after release.
    Settling,
}

/// Axes considered by [`DragHelper::check_touch_slop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAxes {
    Horizontal,
    Vertical,
    Both,
}

pub struct DragHelper {
    drag_state: DragState,
    touch_slop: f32,
    edge_size: f32,
    min_velocity: f32,
    max_velocity: f32,
    tracking_edges: EdgeFlags,
    pointers: FxHashMap<PointerId, PointerState>,
    active_pointer: Option<PointerId>,
    captured: Option<ViewId>,
    container: DragContainer,
    scroller: Scroller,
    release_in_progress: bool,
    // Raw (uncapped-to-minimum) release velocity, used for settle timing.
    release_velocity: (f32, f32),
    release_ranges: (i32, i32),
    requested_state: Option<DragState>,
    idle_deferred: bool,
}

impl DragHelper {
    pub fn new(container: DragContainer, density: f32) -> Self {
        Self::with_sensitivity(container, density, 1.0)
    }

    /// Higher `sensitivity` shrinks the touch slop proportionally.
    ///
    /// # Panics
    ///
    /// Panics unless `sensitivity` is finite and positive.
    pub fn with_sensitivity(container: DragContainer, density: f32, sensitivity: f32) -> Self {
        assert!(
            sensitivity.is_finite() && sensitivity > 0.0,
            "drag sensitivity must be finite and positive, got {sensitivity}"
        );
        Self {
            drag_state: DragState::Idle,
            touch_slop: TOUCH_SLOP * density / sensitivity,
            edge_size: EDGE_SIZE * density,
            min_velocity: MIN_FLING_VELOCITY * density,
            max_velocity: MAX_FLING_VELOCITY * density,
            tracking_edges: EdgeFlags::NONE,
            pointers: FxHashMap::default(),
            active_pointer: None,
            captured: None,
            container,
            scroller: Scroller::new(density),
            release_in_progress: false,
            release_velocity: (0.0, 0.0),
            release_ranges: (0, 0),
            requested_state: None,
            idle_deferred: false,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag_state
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn edge_size(&self) -> f32 {
        self.edge_size
    }

    /// Thickness in px of the band along each edge that counts as an edge touch.
    pub fn set_edge_size(&mut self, edge_size: f32) {
        self.edge_size = edge_size.max(0.0);
    }

    pub fn min_velocity(&self) -> f32 {
        self.min_velocity
    }

    pub fn set_min_velocity(&mut self, min_velocity: f32) {
        self.min_velocity = min_velocity;
    }

    pub fn max_velocity(&self) -> f32 {
        self.max_velocity
    }

    pub fn tracking_edges(&self) -> EdgeFlags {
        self.tracking_edges
    }

    /// Edge touches and edge drags are only reported for these edges.
    pub fn set_edge_tracking_enabled(&mut self, edges: EdgeFlags) {
        self.tracking_edges = edges;
    }

    pub fn container(&self) -> &DragContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut DragContainer {
        &mut self.container
    }

    pub fn captured_view(&self) -> Option<ViewId> {
        self.captured
    }

    pub fn active_pointer_id(&self) -> Option<PointerId> {
        self.active_pointer
    }

    pub fn pointer(&self, id: PointerId) -> Option<&PointerState> {
        self.pointers.get(&id)
    }

    pub fn is_pointer_down(&self, id: PointerId) -> bool {
        self.pointers.contains_key(&id)
    }

    /// Current top-left offset of a child.
    pub fn view_offset(&self, view: ViewId) -> Option<IntOffset> {
        self.container.child(view).map(|child| child.offset())
    }

    /// Captures `view` for dragging by `pointer`, bypassing
    /// [`DragCallback::try_capture_view`].
    ///
    /// # Panics
    ///
    /// Panics if `view` is not a child of the container.
    pub fn capture_child_view<C: DragCallback>(
        &mut self,
        view: ViewId,
        pointer: PointerId,
        callback: &mut C,
    ) {
        assert!(
            self.container.contains(view),
            "capture_child_view: view {view} is not a child of the tracked container"
        );
        self.captured = Some(view);
        self.active_pointer = Some(pointer);
        log::debug!("captured view {view} with pointer {pointer}");
        callback.on_view_captured(view, pointer);
        self.set_drag_state(DragState::Dragging, callback);
    }

    /// Forgets every pointer. The drag state is left alone.
    pub fn cancel(&mut self) {
        self.active_pointer = None;
        self.pointers.clear();
    }

    /// Cancels the gesture and stops any settle, jumping the view to where the
    /// settle would have ended. No-op while idle.
    pub fn abort<C: DragCallback>(&mut self, callback: &mut C) {
        self.cancel();
        if self.drag_state == DragState::Settling {
            self.scroller.abort_animation();
            if let Some(view) = self.captured {
                let target = IntOffset::new(self.scroller.curr_x(), self.scroller.curr_y());
                self.move_view_to(view, target, callback);
            }
        }
        self.set_drag_state(DragState::Idle, callback);
    }

    /// Animates `view` to `(left, top)` outside of a release, e.g. to open or
    /// close a panel programmatically. Returns whether frames must be pumped
    /// through [`continue_settling`](Self::continue_settling).
    ///
    /// # Panics
    ///
    /// Panics if `view` is not a child of the container.
    pub fn smooth_slide_view_to<C: DragCallback>(
        &mut self,
        view: ViewId,
        left: i32,
        top: i32,
        callback: &mut C,
    ) -> bool {
        assert!(
            self.container.contains(view),
            "smooth_slide_view_to: view {view} is not a child of the tracked container"
        );
        self.captured = Some(view);
        self.active_pointer = None;
        let ranges = (
            callback.view_horizontal_drag_range(view),
            callback.view_vertical_drag_range(view),
        );
        let (continuing, state) = self.start_settle(view, left, top, (0.0, 0.0), ranges);
        self.set_drag_state(state, callback);
        if !continuing && self.drag_state == DragState::Idle {
            self.captured = None;
        }
        continuing
    }

    /// Settles the released view at `(left, top)`, timed from the release
    /// velocity and the distance left to travel.
    ///
    /// # Panics
    ///
    /// Panics when called outside [`DragCallback::on_view_released`].
    pub fn settle_captured_view_at(&mut self, left: i32, top: i32) -> bool {
        assert!(
            self.release_in_progress,
            "settle_captured_view_at may only be called from DragCallback::on_view_released"
        );
        let Some(view) = self.captured else {
            return false;
        };
        let (continuing, state) =
            self.start_settle(view, left, top, self.release_velocity, self.release_ranges);
        self.requested_state = Some(state);
        continuing
    }

    /// Flings the released view with its release velocity, stopping inside
    /// the given bounds.
    ///
    /// # Panics
    ///
    /// Panics when called outside [`DragCallback::on_view_released`].
    pub fn fling_captured_view(&mut self, min_left: i32, min_top: i32, max_left: i32, max_top: i32) {
        assert!(
            self.release_in_progress,
            "fling_captured_view may only be called from DragCallback::on_view_released"
        );
        let Some(offset) = self.captured.and_then(|view| self.view_offset(view)) else {
            return;
        };
        let (vx, vy) = self.release_velocity;
        self.scroller
            .fling(offset.x, offset.y, vx, vy, min_left, max_left, min_top, max_top);
        self.requested_state = Some(DragState::Settling);
    }

    /// Advances an active settle to `frame_time_nanos` and moves the view.
    ///
    /// With `defer_idle` the transition to [`DragState::Idle`] at the end of
    /// the animation is postponed to the next call. Returns whether the helper
    /// is still settling.
    pub fn continue_settling<C: DragCallback>(
        &mut self,
        frame_time_nanos: u64,
        defer_idle: bool,
        callback: &mut C,
    ) -> bool {
        if self.idle_deferred {
            self.set_drag_state(DragState::Idle, callback);
            return false;
        }
        if self.drag_state != DragState::Settling {
            return false;
        }
        let Some(view) = self.captured else {
            self.set_drag_state(DragState::Idle, callback);
            return false;
        };

        let mut keep_going = self.scroller.compute_scroll_offset(frame_time_nanos);
        let x = self.scroller.curr_x();
        let y = self.scroller.curr_y();
        if let Some(offset) = self.view_offset(view) {
            let dx = x - offset.x;
            let dy = y - offset.y;
            if dx != 0 || dy != 0 {
                let left = if dx != 0 {
                    callback.clamp_view_position_horizontal(view, x, dx)
                } else {
                    offset.x
                };
                let top = if dy != 0 {
                    callback.clamp_view_position_vertical(view, y, dy)
                } else {
                    offset.y
                };
                self.container.move_child_to(view, IntOffset::new(left, top));
                log::trace!("settle frame: view {view} at ({left}, {top})");
                callback.on_view_position_changed(view, left, top, left - offset.x, top - offset.y);
            }
        }

        if keep_going && x == self.scroller.final_x() && y == self.scroller.final_y() {
            self.scroller.abort_animation();
            keep_going = false;
        }
        if !keep_going {
            if defer_idle {
                self.idle_deferred = true;
            } else {
                self.set_drag_state(DragState::Idle, callback);
            }
        }
        self.drag_state == DragState::Settling
    }

    /// Watches an event on its way to the container's children. Returns true
    /// once a drag has been captured, at which point the host should route
    /// the rest of the gesture to [`process_event`](Self::process_event).
    pub fn should_intercept<C: DragCallback>(
        &mut self,
        event: &PointerEvent,
        callback: &mut C,
    ) -> bool {
        let id = event.id;
        match event.kind {
            PointerEventKind::Down => {
                if self.is_only_pointer(id) {
                    self.cancel();
                    self.save_initial_motion(event);
                    let target = self.find_top_child_under(event.position, callback);
                    // Catching a settling view stops it where it is.
                    if target.is_some()
                        && target == self.captured
                        && self.drag_state == DragState::Settling
                    {
                        self.try_capture_view_for_drag(target, id, callback);
                    }
                    self.report_edge_touch(id, callback);
                } else {
                    self.save_initial_motion(event);
                    match self.drag_state {
                        DragState::Idle => self.report_edge_touch(id, callback),
                        DragState::Settling => {
                            let target = self.find_top_child_under(event.position, callback);
                            if target.is_some() && target == self.captured {
                                self.try_capture_view_for_drag(target, id, callback);
                            }
                        }
                        DragState::Dragging => {}
                    }
                }
            }
            PointerEventKind::Move => {
                if !self.track_move(event) {
                    return self.drag_state == DragState::Dragging;
                }
                let delta = self.motion_since_down(event);
                let target = self.find_top_child_under(event.position, callback);
                let past_slop =
                    target.is_some_and(|view| self.check_slop_for_view(view, delta, &*callback));
                let blocked = past_slop
                    && target.is_some_and(|view| !self.would_move(view, delta, &*callback));
                if !blocked {
                    self.report_new_edge_drags(delta, id, callback);
                    if self.drag_state != DragState::Dragging && past_slop {
                        self.try_capture_view_for_drag(target, id, callback);
                    }
                }
                self.save_last_motion(event);
            }
            PointerEventKind::Up => {
                if self.is_only_pointer(id) {
                    self.cancel();
                } else {
                    self.pointers.remove(&id);
                }
            }
            PointerEventKind::Cancel => self.cancel(),
        }
        self.drag_state == DragState::Dragging
    }

    /// Drives the drag for an event the host routed to the container itself.
    pub fn process_event<C: DragCallback>(&mut self, event: &PointerEvent, callback: &mut C) {
        let id = event.id;
        match event.kind {
            PointerEventKind::Down => {
                // Hosts that intercept first deliver the same down twice.
                let seen = self.is_recorded_press(event);
                if self.is_only_pointer(id) {
                    self.cancel();
                    self.save_initial_motion(event);
                    let target = self.find_top_child_under(event.position, callback);
                    self.try_capture_view_for_drag(target, id, callback);
                    if !seen {
                        self.report_edge_touch(id, callback);
                    }
                } else {
                    self.save_initial_motion(event);
                    match self.drag_state {
                        DragState::Idle => {
                            let target = self.find_top_child_under(event.position, callback);
                            self.try_capture_view_for_drag(target, id, callback);
                            if !seen {
                                self.report_edge_touch(id, callback);
                            }
                        }
                        DragState::Settling if self.is_captured_view_under(event.position) => {
                            self.try_capture_view_for_drag(self.captured, id, callback);
                        }
                        // The driving pointer keeps the view until it lifts.
                        DragState::Settling | DragState::Dragging => {}
                    }
                }
            }
            PointerEventKind::Move => {
                if !self.track_move(event) {
                    return;
                }
                if self.drag_state == DragState::Dragging {
                    if self.active_pointer == Some(id) {
                        self.drag_with_pointer(event, callback);
                    }
                } else {
                    let delta = self.motion_since_down(event);
                    self.report_new_edge_drags(delta, id, callback);
                    if self.drag_state != DragState::Dragging {
                        let target = self.find_top_child_under(event.position, callback);
                        if target.is_some_and(|view| self.check_slop_for_view(view, delta, &*callback))
                        {
                            self.try_capture_view_for_drag(target, id, callback);
                        }
                    }
                }
                self.save_last_motion(event);
            }
            PointerEventKind::Up => {
                match self.pointers.get_mut(&id) {
                    Some(state) => state.velocity.add_position(event.uptime_ms, event.position),
                    None => log::warn!("Pointer {id} lifted without a down event"),
                }
                if self.is_only_pointer(id) {
                    if self.drag_state == DragState::Dragging {
                        self.release_view_for_pointer_up(callback);
                    }
                    self.cancel();
                } else {
                    if self.drag_state == DragState::Dragging && self.active_pointer == Some(id) {
                        self.hand_off_or_release(id, callback);
                    }
                    self.pointers.remove(&id);
                }
            }
            PointerEventKind::Cancel => {
                if self.drag_state == DragState::Dragging {
                    self.release_velocity = (0.0, 0.0);
                    self.dispatch_view_released(0.0, 0.0, callback);
                }
                self.cancel();
            }
        }
    }

    /// True when any pointer down has moved past the touch slop along `axes`.
    pub fn check_touch_slop(&self, axes: DragAxes) -> bool {
        self.pointers
            .keys()
            .any(|&id| self.check_touch_slop_for(axes, id))
    }

    /// True when `pointer` has moved past the touch slop along `axes`.
    pub fn check_touch_slop_for(&self, axes: DragAxes, pointer: PointerId) -> bool {
        let Some(state) = self.pointers.get(&pointer) else {
            return false;
        };
        let dx = state.last.x - state.initial.x;
        let dy = state.last.y - state.initial.y;
        match axes {
            DragAxes::Horizontal => dx.abs() > self.touch_slop,
            DragAxes::Vertical => dy.abs() > self.touch_slop,
            DragAxes::Both => dx * dx + dy * dy > self.touch_slop * self.touch_slop,
        }
    }

    /// True when any pointer down went down near one of `edges`.
    pub fn is_edge_touched(&self, edges: EdgeFlags) -> bool {
        self.pointers
            .values()
            .any(|state| state.edges_touched.intersects(edges))
    }

    pub fn is_edge_touched_by(&self, edges: EdgeFlags, pointer: PointerId) -> bool {
        self.pointers
            .get(&pointer)
            .is_some_and(|state| state.edges_touched.intersects(edges))
    }

    fn set_drag_state<C: DragCallback>(&mut self, state: DragState, callback: &mut C) {
        self.idle_deferred = false;
        if self.drag_state == state {
            return;
        }
        log::debug!("drag state {:?} -> {:?}", self.drag_state, state);
        self.drag_state = state;
        callback.on_view_drag_state_changed(self, state);
        if state == DragState::Idle {
            self.captured = None;
        }
    }

    fn try_capture_view_for_drag<C: DragCallback>(
        &mut self,
        target: Option<ViewId>,
        pointer: PointerId,
        callback: &mut C,
    ) -> bool {
        let Some(view) = target else {
            return false;
        };
        if self.captured == Some(view) && self.active_pointer == Some(pointer) {
            return true;
        }
        if callback.try_capture_view(self, view, pointer) {
            self.capture_child_view(view, pointer, callback);
            return true;
        }
        false
    }

    fn dispatch_view_released<C: DragCallback>(&mut self, xvel: f32, yvel: f32, callback: &mut C) {
        let Some(view) = self.captured else {
            return;
        };
        log::debug!("released view {view} at ({xvel}, {yvel}) px/s");
        self.release_ranges = (
            callback.view_horizontal_drag_range(view),
            callback.view_vertical_drag_range(view),
        );
        self.requested_state = None;
        self.release_in_progress = true;
        callback.on_view_released(self, view, xvel, yvel);
        self.release_in_progress = false;

        if let Some(state) = self.requested_state.take() {
            self.set_drag_state(state, callback);
        }
        if self.drag_state == DragState::Dragging {
            self.set_drag_state(DragState::Idle, callback);
        }
    }

    fn release_view_for_pointer_up<C: DragCallback>(&mut self, callback: &mut C) {
        let velocity = self
            .active_pointer
            .and_then(|id| self.pointers.get(&id))
            .map(|state| state.velocity.velocity(self.max_velocity))
            .unwrap_or((0.0, 0.0));
        self.release_velocity = velocity;
        let xvel = clamp_mag(velocity.0, self.min_velocity, self.max_velocity);
        let yvel = clamp_mag(velocity.1, self.min_velocity, self.max_velocity);
        self.dispatch_view_released(xvel, yvel, callback);
    }

    // The active pointer lifted while others stay down: pass the drag to one
    // of them that is over the captured view, otherwise release.
    fn hand_off_or_release<C: DragCallback>(&mut self, lifted: PointerId, callback: &mut C) {
        let mut candidates: SmallVec<[PointerId; 4]> = self
            .pointers
            .iter()
            .filter(|(id, state)| **id != lifted && self.is_captured_view_under(state.last))
            .map(|(&id, _)| id)
            .collect();
        candidates.sort_unstable();

        for candidate in candidates {
            if self.try_capture_view_for_drag(self.captured, candidate, callback) {
                return;
            }
        }
        self.release_view_for_pointer_up(callback);
    }

    fn drag_with_pointer<C: DragCallback>(&mut self, event: &PointerEvent, callback: &mut C) {
        let Some(last) = self.pointers.get(&event.id).map(|state| state.last) else {
            return;
        };
        let Some(view) = self.captured else {
            return;
        };
        let Some(offset) = self.view_offset(view) else {
            return;
        };
        let dx = (event.position.x - last.x) as i32;
        let dy = (event.position.y - last.y) as i32;
        if dx == 0 && dy == 0 {
            return;
        }
        let left = if dx != 0 {
            callback.clamp_view_position_horizontal(view, offset.x.saturating_add(dx), dx)
        } else {
            offset.x
        };
        let top = if dy != 0 {
            callback.clamp_view_position_vertical(view, offset.y.saturating_add(dy), dy)
        } else {
            offset.y
        };
        self.container.move_child_to(view, IntOffset::new(left, top));
        let (moved_x, moved_y) = (left.saturating_sub(offset.x), top.saturating_sub(offset.y));
        callback.on_view_position_changed(view, left, top, moved_x, moved_y);
    }

    fn move_view_to<C: DragCallback>(&mut self, view: ViewId, target: IntOffset, callback: &mut C) {
        let Some(offset) = self.view_offset(view) else {
            return;
        };
        let delta = target - offset;
        if delta == IntOffset::ZERO {
            return;
        }
        self.container.move_child_to(view, target);
        callback.on_view_position_changed(view, target.x, target.y, delta.x, delta.y);
    }

    fn start_settle(
        &mut self,
        view: ViewId,
        final_left: i32,
        final_top: i32,
        velocity: (f32, f32),
        ranges: (i32, i32),
    ) -> (bool, DragState) {
        let Some(offset) = self.view_offset(view) else {
            return (false, DragState::Idle);
        };
        let dx = final_left - offset.x;
        let dy = final_top - offset.y;
        if dx == 0 && dy == 0 {
            self.scroller.abort_animation();
            return (false, DragState::Idle);
        }
        let duration = self.compute_settle_duration(dx, dy, velocity, ranges);
        log::debug!(
            "settling view {view} from ({}, {}) to ({final_left}, {final_top}) over {duration}ms",
            offset.x,
            offset.y
        );
        self.scroller.start_scroll(offset.x, offset.y, dx, dy, duration);
        (true, DragState::Settling)
    }

    fn compute_settle_duration(
        &self,
        dx: i32,
        dy: i32,
        velocity: (f32, f32),
        ranges: (i32, i32),
    ) -> i64 {
        let min = self.min_velocity as i32;
        let max = self.max_velocity as i32;
        let xvel = clamp_mag_i32(velocity.0 as i32, min, max);
        let yvel = clamp_mag_i32(velocity.1 as i32, min, max);
        let added_velocity = (xvel.abs() + yvel.abs()) as f32;
        let added_distance = (dx.abs() + dy.abs()) as f32;

        let x_weight = if xvel != 0 {
            xvel.abs() as f32 / added_velocity
        } else {
            dx.abs() as f32 / added_distance
        };
        let y_weight = if yvel != 0 {
            yvel.abs() as f32 / added_velocity
        } else {
            dy.abs() as f32 / added_distance
        };

        let x_duration = self.compute_axis_duration(dx, xvel, ranges.0);
        let y_duration = self.compute_axis_duration(dy, yvel, ranges.1);
        (x_duration as f32 * x_weight + y_duration as f32 * y_weight) as i64
    }

    fn compute_axis_duration(&self, delta: i32, velocity: i32, motion_range: i32) -> i64 {
        if delta == 0 {
            return 0;
        }
        let width = self.container.width().max(1);
        let half_width = (width / 2) as f32;
        let distance_ratio = (delta.abs() as f32 / width as f32).min(1.0);
        let distance = half_width + half_width * distance_influence_for_snap(distance_ratio);

        let velocity = velocity.abs();
        let duration = if velocity > 0 {
            4 * (1000.0 * (distance / velocity as f32).abs()).round() as i64
        } else {
            let range = delta.abs() as f32 / motion_range.max(1) as f32;
            ((range + 1.0) * BASE_SETTLE_DURATION_MS as f32) as i64
        };
        duration.min(MAX_SETTLE_DURATION_MS)
    }

    fn is_only_pointer(&self, id: PointerId) -> bool {
        self.pointers.keys().all(|&other| other == id)
    }

    fn is_recorded_press(&self, event: &PointerEvent) -> bool {
        self.pointers
            .get(&event.id)
            .is_some_and(|state| state.is_press(event.position, event.uptime_ms))
    }

    fn save_initial_motion(&mut self, event: &PointerEvent) {
        let edges = self.edges_touched_at(event.position);
        self.pointers
            .insert(event.id, PointerState::new(event.position, event.uptime_ms, edges));
    }

    fn save_last_motion(&mut self, event: &PointerEvent) {
        if let Some(state) = self.pointers.get_mut(&event.id) {
            state.last = event.position;
        }
    }

    // Records a velocity sample; false for a pointer that never went down.
    fn track_move(&mut self, event: &PointerEvent) -> bool {
        match self.pointers.get_mut(&event.id) {
            Some(state) => {
                state.velocity.add_position(event.uptime_ms, event.position);
                true
            }
            None => {
                log::warn!(
                    "Ignoring pointer {} move: no down event was seen for it",
                    event.id
                );
                false
            }
        }
    }

    fn motion_since_down(&self, event: &PointerEvent) -> (f32, f32) {
        self.pointers.get(&event.id).map_or((0.0, 0.0), |state| {
            (
                event.position.x - state.initial.x,
                event.position.y - state.initial.y,
            )
        })
    }

    fn edges_touched_at(&self, position: Point) -> EdgeFlags {
        let width = self.container.width() as f32;
        let height = self.container.height() as f32;
        let mut edges = EdgeFlags::NONE;
        if position.x < self.edge_size {
            edges |= EdgeFlags::LEFT;
        }
        if position.y < self.edge_size {
            edges |= EdgeFlags::TOP;
        }
        if position.x > width - self.edge_size {
            edges |= EdgeFlags::RIGHT;
        }
        if position.y > height - self.edge_size {
            edges |= EdgeFlags::BOTTOM;
        }
        edges
    }

    fn report_edge_touch<C: DragCallback>(&mut self, id: PointerId, callback: &mut C) {
        let Some(state) = self.pointers.get(&id) else {
            return;
        };
        let edges = state.edges_touched & self.tracking_edges;
        if !edges.is_empty() {
            log::debug!("pointer {id} touched edges {edges:?}");
            callback.on_edge_touched(edges, id);
        }
    }

    fn report_new_edge_drags<C: DragCallback>(
        &mut self,
        (dx, dy): (f32, f32),
        id: PointerId,
        callback: &mut C,
    ) {
        let mut started = EdgeFlags::NONE;
        for (edge, delta, other) in [
            (EdgeFlags::LEFT, dx, dy),
            (EdgeFlags::TOP, dy, dx),
            (EdgeFlags::RIGHT, dx, dy),
            (EdgeFlags::BOTTOM, dy, dx),
        ] {
            if self.check_new_edge_drag(delta, other, id, edge, callback) {
                started |= edge;
            }
        }
        if started.is_empty() {
            return;
        }
        if let Some(state) = self.pointers.get_mut(&id) {
            state.edge_drags_in_progress |= started;
        }
        log::debug!("pointer {id} started edge drag {started:?}");
        callback.on_edge_drag_started(started, id);
    }

    fn check_new_edge_drag<C: DragCallback>(
        &mut self,
        delta: f32,
        other_delta: f32,
        id: PointerId,
        edge: EdgeFlags,
        callback: &mut C,
    ) -> bool {
        let Some(state) = self.pointers.get(&id) else {
            return false;
        };
        let abs_delta = delta.abs();
        let abs_other = other_delta.abs();
        if !state.edges_touched.contains(edge)
            || !self.tracking_edges.contains(edge)
            || state.edge_drags_locked.contains(edge)
            || state.edge_drags_in_progress.contains(edge)
            || (abs_delta <= self.touch_slop && abs_other <= self.touch_slop)
        {
            return false;
        }
        if abs_delta < abs_other * 0.5 && callback.on_edge_lock(edge) {
            if let Some(state) = self.pointers.get_mut(&id) {
                state.edge_drags_locked.insert(edge);
            }
            return false;
        }
        abs_delta > self.touch_slop
    }

    fn check_slop_for_view<C: DragCallback>(
        &self,
        view: ViewId,
        (dx, dy): (f32, f32),
        callback: &C,
    ) -> bool {
        let horizontal = callback.view_horizontal_drag_range(view) > 0;
        let vertical = callback.view_vertical_drag_range(view) > 0;
        if horizontal && vertical {
            dx * dx + dy * dy > self.touch_slop * self.touch_slop
        } else if vertical {
            dy.abs() > self.touch_slop
        } else if horizontal && 3.0 * dy.abs() < dx.abs() {
            dx.abs() > self.touch_slop
        } else {
            false
        }
    }

    // Whether the clamps would let the view move at all on an axis it can
    // be dragged along.
    fn would_move<C: DragCallback>(&self, view: ViewId, (dx, dy): (f32, f32), callback: &C) -> bool {
        let Some(offset) = self.view_offset(view) else {
            return false;
        };
        let dx = dx as i32;
        let dy = dy as i32;
        let new_left =
            callback.clamp_view_position_horizontal(view, offset.x.saturating_add(dx), dx);
        let new_top =
            callback.clamp_view_position_vertical(view, offset.y.saturating_add(dy), dy);
        let horizontal_range = callback.view_horizontal_drag_range(view);
        let vertical_range = callback.view_vertical_drag_range(view);
        (horizontal_range > 0 && new_left != offset.x) || (vertical_range > 0 && new_top != offset.y)
    }

    fn find_top_child_under<C: DragCallback>(&self, position: Point, callback: &C) -> Option<ViewId> {
        let x = position.x as i32;
        let y = position.y as i32;
        (0..self.container.len())
            .rev()
            .filter_map(|index| self.container.child_at(callback.ordered_child_index(index)))
            .find(|child| child.bounds.contains(x, y))
            .map(|child| child.id)
    }

    fn is_captured_view_under(&self, position: Point) -> bool {
        self.captured
            .and_then(|view| self.container.child(view))
            .is_some_and(|child| child.bounds.contains(position.x as i32, position.y as i32))
    }
}

fn distance_influence_for_snap(fraction: f32) -> f32 {
    let centered = (fraction - 0.5) * 0.3 * std::f32::consts::FRAC_PI_2;
    centered.sin()
}

/// Zero below `min`, saturated at `max`, sign preserved.
fn clamp_mag(value: f32, min: f32, max: f32) -> f32 {
    let magnitude = value.abs();
    if magnitude < min {
        0.0
    } else if magnitude > max {
        max.copysign(value)
    } else {
        value
    }
}

fn clamp_mag_i32(value: i32, min: i32, max: i32) -> i32 {
    let magnitude = value.abs();
    if magnitude < min {
        0
    } else if magnitude > max {
        if value > 0 {
            max
        } else {
            -max
        }
    } else {
        value
    }
}

#[cfg(test)]
#[path = "../tests/drag_helper_tests.rs"]
mod tests;
