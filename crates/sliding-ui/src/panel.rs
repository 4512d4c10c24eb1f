use sliding_foundation::{
    DragCallback, DragContainer, DragHelper, DragState, PointerEvent, PointerId, ViewId,
};
use sliding_ui_graphics::{IntOffset, IntRect, IntSize};

use crate::config::PanelConfig;
use crate::direction::Direction;
use crate::listener::PanelSlideListener;
use crate::policy::{Axis, DirectionPolicy};
use crate::scrim::{Scrim, ScrimRenderer};
use crate::surface::PanelSurface;

/// Release speed (logical px/sec) below which a panel release counts as at rest.
pub const PANEL_MIN_FLING_VELOCITY: f32 = 400.0;

/// A surface whose content view can be slid away in one [`Direction`].
///
/// The host forwards pointer events through [`should_intercept`] (while its
/// children still see them) and [`process_event`] (once the panel owns the
/// gesture), and calls [`compute_scroll`] every frame while it returns true.
///
/// [`should_intercept`]: Self::should_intercept
/// [`process_event`]: Self::process_event
/// [`compute_scroll`]: Self::compute_scroll
pub struct SliderPanel {
    helper: DragHelper,
    content: PanelContent,
    locked: bool,
}

// Drag policy for the content view, kept apart from the helper so both can
// be borrowed mutably at once.
struct PanelContent {
    view: ViewId,
    config: PanelConfig,
    policy: DirectionPolicy,
    surface: IntSize,
    scrim: ScrimRenderer,
    percent: f32,
    listener: Box<dyn PanelSlideListener>,
}

impl SliderPanel {
    pub fn new(
        surface: PanelSurface,
        config: PanelConfig,
        listener: Box<dyn PanelSlideListener>,
    ) -> Self {
        let container = DragContainer::new(surface.size)
            .with_child(surface.content, IntRect::from_size(surface.size));
        let mut helper =
            DragHelper::with_sensitivity(container, surface.density, config.sensitivity());
        helper.set_min_velocity(PANEL_MIN_FLING_VELOCITY * surface.density);
        helper.set_edge_tracking_enabled(config.direction().edges());
        if let Some(touch_size) = config.touch_size() {
            helper.set_edge_size(touch_size);
        }

        let content = PanelContent {
            view: surface.content,
            policy: DirectionPolicy::for_direction(config.direction()),
            surface: surface.size,
            scrim: ScrimRenderer::from_config(&config),
            percent: 0.0,
            config,
            listener,
        };
        Self {
            helper,
            content,
            locked: false,
        }
    }

    /// Watches an event bound for the content's children. Returns true once
    /// the panel has captured the content and wants the rest of the gesture.
    pub fn should_intercept(&mut self, event: &PointerEvent) -> bool {
        if self.locked {
            return false;
        }
        self.helper.should_intercept(event, &mut self.content)
    }

    /// Handles an event routed to the panel itself. Returns false while locked.
    pub fn process_event(&mut self, event: &PointerEvent) -> bool {
        if self.locked {
            return false;
        }
        self.helper.process_event(event, &mut self.content);
        true
    }

    /// Advances a settle to `frame_time_nanos`. Returns whether another frame
    /// is needed.
    pub fn compute_scroll(&mut self, frame_time_nanos: u64) -> bool {
        self.helper
            .continue_settling(frame_time_nanos, true, &mut self.content)
    }

    /// Stops any motion and ignores input until [`unlock`](Self::unlock).
    pub fn lock(&mut self) {
        self.helper.abort(&mut self.content);
        self.locked = true;
        log::debug!("panel locked");
    }

    pub fn unlock(&mut self) {
        self.helper.abort(&mut self.content);
        self.locked = false;
        log::debug!("panel unlocked");
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn direction(&self) -> Direction {
        self.content.config.direction()
    }

    pub fn config(&self) -> &PanelConfig {
        &self.content.config
    }

    pub fn drag_state(&self) -> DragState {
        self.helper.drag_state()
    }

    pub fn content_view(&self) -> ViewId {
        self.content.view
    }

    pub fn content_offset(&self) -> IntOffset {
        self.helper
            .view_offset(self.content.view)
            .unwrap_or(IntOffset::ZERO)
    }

    /// Last reported uncovered fraction.
    pub fn slide_percent(&self) -> f32 {
        self.content.percent
    }

    pub fn scrim(&self) -> Scrim {
        let content = IntRect::from_origin_size(self.content_offset(), self.content.surface);
        self.content.scrim.scrim(
            self.direction(),
            self.content.surface,
            content,
            self.content.percent,
        )
    }

    pub fn surface_size(&self) -> IntSize {
        self.content.surface
    }

    /// Applies a new layout size. The content keeps its offset.
    pub fn set_surface_size(&mut self, size: IntSize) {
        let offset = self.content_offset();
        let container = self.helper.container_mut();
        container.set_size(size);
        container.add_child(self.content.view, IntRect::from_origin_size(offset, size));
        self.content.surface = size;
        let main = self.content.policy.main_offset(offset);
        self.content.percent = self.content.policy.percent(main, size);
    }
}

impl PanelContent {
    // A touch size replaces the fractional band with the helper's edge band.
    fn edge_eligible(&self, helper: &DragHelper, pointer: PointerId) -> bool {
        if self.config.touch_size().is_some() {
            return helper.is_edge_touched_by(self.config.direction().edges(), pointer);
        }
        helper.pointer(pointer).is_some_and(|state| {
            self.policy.edge_hit(
                state.initial_position(),
                self.surface,
                self.config.edge_size(),
            )
        })
    }
}

impl DragCallback for PanelContent {
    fn on_view_drag_state_changed(&mut self, helper: &DragHelper, state: DragState) {
        self.listener.on_state_changed(state);
        if state != DragState::Idle {
            return;
        }
        let offset = helper.view_offset(self.view).unwrap_or(IntOffset::ZERO);
        if self.policy.main_offset(offset) == 0 {
            log::debug!("panel at rest");
            self.listener.on_opened();
        } else {
            log::debug!("panel slid away to {offset:?}");
            self.listener.on_closed();
        }
    }

    fn on_view_position_changed(&mut self, _view: ViewId, left: i32, top: i32, _dx: i32, _dy: i32) {
        let main = self.policy.main_offset(IntOffset::new(left, top));
        self.percent = self.policy.percent(main, self.surface);
        log::trace!("panel offset {main}, {:.3} revealed", self.percent);
        self.listener.on_slide_change(self.percent);
    }

    fn on_view_released(&mut self, helper: &mut DragHelper, view: ViewId, xvel: f32, yvel: f32) {
        let offset = helper.view_offset(view).unwrap_or(IntOffset::ZERO);
        let main = self.policy.main_offset(offset);
        let (velocity, cross_velocity) = self.policy.split_velocity(xvel, yvel);
        let target = self.policy.settle_target(
            main,
            velocity,
            cross_velocity,
            self.surface,
            self.config.release_thresholds(),
        );
        log::debug!("panel released at {main} with velocity {velocity}; settling at {target}");
        let target = self.policy.offset_for(target);
        helper.settle_captured_view_at(target.x, target.y);
    }

    fn view_horizontal_drag_range(&self, _view: ViewId) -> i32 {
        self.policy.drag_ranges(self.surface).0
    }

    fn view_vertical_drag_range(&self, _view: ViewId) -> i32 {
        self.policy.drag_ranges(self.surface).1
    }

    fn try_capture_view(&mut self, helper: &DragHelper, view: ViewId, pointer: PointerId) -> bool {
        view == self.view && (!self.config.is_edge_only() || self.edge_eligible(helper, pointer))
    }

    fn clamp_view_position_horizontal(&self, _view: ViewId, left: i32, _dx: i32) -> i32 {
        match self.policy.axis {
            Axis::Horizontal => self.policy.clamp(left, self.surface),
            Axis::Vertical => 0,
        }
    }

    fn clamp_view_position_vertical(&self, _view: ViewId, top: i32, _dy: i32) -> i32 {
        match self.policy.axis {
            Axis::Vertical => self.policy.clamp(top, self.surface),
            Axis::Horizontal => 0,
        }
    }
}
