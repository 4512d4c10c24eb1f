//! Scripted pointer input for panel tests
//!
//! [`GestureRobot`] plays the host's part: it timestamps pointer events,
//! routes them through the panel's intercept and dispatch entry points the
//! way a view hierarchy would, and pumps frames until a settle finishes.
//!
//! # Example
//!
//! ```ignore
//! let mut robot = GestureRobot::new(panel, Routing::Direct);
//! robot.drag(1, Point::new(10.0, 500.0), Point::new(400.0, 500.0), 10);
//! robot.pump_frames();
//! assert_eq!(robot.panel().content_offset().x, 1000);
//! ```

use sliding_foundation::{PointerEvent, PointerEventKind, PointerId};
use sliding_ui::{FrameClock, SliderPanel};
use sliding_ui_graphics::Point;

use crate::clock::ManualFrameClock;

/// Time between scripted move events.
pub const MOVE_INTERVAL_MS: i64 = 10;

/// How long [`GestureRobot::drag`] holds still before lifting, long enough
/// for the release velocity to read as zero.
pub const REST_BEFORE_RELEASE_MS: i64 = 50;

const MAX_FRAMES: usize = 1_000;

/// How the host hands events to the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Routing {
    /// A child consumes the gesture; the panel only sees events through its
    /// intercept probe until the probe claims the gesture.
    ChildConsumes,
    /// Nothing under the pointer wants the gesture, so the panel's own
    /// handler receives it from the first down.
    Direct,
}

pub struct GestureRobot {
    panel: SliderPanel,
    routing: Routing,
    clock: ManualFrameClock,
    uptime_ms: i64,
    pointers_down: Vec<PointerId>,
    intercepted: bool,
}

impl GestureRobot {
    pub fn new(panel: SliderPanel, routing: Routing) -> Self {
        Self {
            panel,
            routing,
            clock: ManualFrameClock::new(),
            uptime_ms: 0,
            pointers_down: Vec::new(),
            intercepted: false,
        }
    }

    pub fn panel(&self) -> &SliderPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut SliderPanel {
        &mut self.panel
    }

    pub fn into_panel(self) -> SliderPanel {
        self.panel
    }

    pub fn uptime_ms(&self) -> i64 {
        self.uptime_ms
    }

    /// Whether the panel has taken over the current gesture.
    pub fn intercepted(&self) -> bool {
        self.intercepted
    }

    /// Lets time pass without any input.
    pub fn hold(&mut self, ms: i64) -> &mut Self {
        self.uptime_ms += ms;
        self
    }

    pub fn down(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        self.dispatch(PointerEvent::down(id, x, y))
    }

    /// Moves a pointer after [`MOVE_INTERVAL_MS`].
    pub fn move_to(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        self.uptime_ms += MOVE_INTERVAL_MS;
        self.dispatch(PointerEvent::moved(id, x, y))
    }

    pub fn up(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        self.dispatch(PointerEvent::up(id, x, y))
    }

    pub fn cancel(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        self.dispatch(PointerEvent::cancel(id, x, y))
    }

    /// Drags from `from` to `to` in `steps` moves, then holds still and lifts,
    /// so the release carries no velocity.
    pub fn drag(&mut self, id: PointerId, from: Point, to: Point, steps: u32) -> &mut Self {
        self.down(id, from.x, from.y);
        self.slide(id, from, to, steps, MOVE_INTERVAL_MS);
        self.hold(REST_BEFORE_RELEASE_MS);
        self.dispatch(PointerEvent::moved(id, to.x, to.y));
        self.up(id, to.x, to.y)
    }

    /// Swipes from `from` to `to` in `steps` moves `step_ms` apart and lifts
    /// without pausing.
    pub fn fling(
        &mut self,
        id: PointerId,
        from: Point,
        to: Point,
        steps: u32,
        step_ms: i64,
    ) -> &mut Self {
        self.down(id, from.x, from.y);
        self.slide(id, from, to, steps, step_ms);
        self.up(id, to.x, to.y)
    }

    /// Calls the panel's frame hook until it stops asking for frames.
    /// Returns the number of frames that asked for another.
    ///
    /// # Panics
    ///
    /// Panics if the panel keeps asking for frames.
    pub fn pump_frames(&mut self) -> usize {
        let mut frames = 0;
        while self.panel.compute_scroll(self.clock.frame_time_nanos()) {
            frames += 1;
            assert!(frames < MAX_FRAMES, "panel kept requesting frames");
        }
        frames
    }

    /// Sends one event through the host routing. Returns `self` for chaining.
    pub fn dispatch(&mut self, event: PointerEvent) -> &mut Self {
        let event = event.at(self.uptime_ms);
        match event.kind {
            PointerEventKind::Down => {
                if self.pointers_down.is_empty() {
                    self.intercepted = false;
                }
                if !self.pointers_down.contains(&event.id) {
                    self.pointers_down.push(event.id);
                }
            }
            PointerEventKind::Up => self.pointers_down.retain(|&id| id != event.id),
            PointerEventKind::Cancel => self.pointers_down.clear(),
            PointerEventKind::Move => {}
        }

        match self.routing {
            Routing::Direct => {
                if event.kind == PointerEventKind::Down && self.pointers_down.len() == 1 {
                    self.panel.should_intercept(&event);
                }
                self.panel.process_event(&event);
            }
            Routing::ChildConsumes => {
                if self.intercepted {
                    self.panel.process_event(&event);
                } else if self.panel.should_intercept(&event) {
                    self.intercepted = true;
                }
            }
        }
        self
    }

    fn slide(&mut self, id: PointerId, from: Point, to: Point, steps: u32, step_ms: i64) {
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.uptime_ms += step_ms;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.dispatch(PointerEvent::moved(id, x, y));
        }
    }
}
