//! Attaching a panel to a host and driving it through the public interface.

use std::cell::Cell;
use std::rc::Rc;

use sliding_testing::{GestureRobot, Routing};
use sliding_ui::prelude::*;
use sliding_ui_graphics::{IntSize, Point};

fn surface() -> PanelSurface {
    PanelSurface::new(IntSize::new(800, 1200)).with_content(3)
}

fn counting_host() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let dismissed = Rc::new(Cell::new(0));
    let counter = dismissed.clone();
    (dismissed, move || counter.set(counter.get() + 1))
}

#[test]
fn attach_without_config_uses_defaults() {
    let (_, host) = counting_host();
    let panel = Sliding::attach(surface(), None, host);

    assert_eq!(panel.direction(), Direction::Left);
    assert_eq!(panel.content_view(), 3);
    assert_eq!(panel.drag_state(), DragState::Idle);
    assert!(!panel.is_locked());
    assert_eq!(panel.config().distance_threshold(), 0.25);
    assert_eq!(panel.config().velocity_threshold(), 5.0);
}

#[test]
fn sliding_away_dismisses_the_host() {
    let (dismissed, host) = counting_host();
    let panel = Sliding::attach(surface(), None, host);
    let mut robot = GestureRobot::new(panel, Routing::Direct);

    robot.drag(1, Point::new(20.0, 600.0), Point::new(420.0, 600.0), 8);
    robot.pump_frames();

    assert_eq!(robot.panel().content_offset().x, 800);
    assert_eq!(dismissed.get(), 1);
}

#[test]
fn returning_to_rest_keeps_the_host() {
    let (dismissed, host) = counting_host();
    let panel = Sliding::attach(surface(), None, host);
    let mut robot = GestureRobot::new(panel, Routing::Direct);

    robot.drag(1, Point::new(20.0, 600.0), Point::new(120.0, 600.0), 5);
    robot.pump_frames();

    assert_eq!(robot.panel().content_offset().x, 0);
    assert_eq!(dismissed.get(), 0);
}

#[test]
fn interface_lock_blocks_gestures() {
    let (dismissed, host) = counting_host();
    let mut panel = Sliding::attach(surface(), None, host);
    {
        let control: &mut dyn SlidingInterface = &mut panel;
        control.lock();
    }
    assert!(panel.is_locked());

    let mut robot = GestureRobot::new(panel, Routing::Direct);
    robot.drag(1, Point::new(20.0, 600.0), Point::new(600.0, 600.0), 8);
    assert_eq!(robot.pump_frames(), 0);
    assert_eq!(robot.panel().content_offset().x, 0);
    assert_eq!(dismissed.get(), 0);

    let mut panel = robot.into_panel();
    SlidingInterface::unlock(&mut panel);
    assert!(!panel.is_locked());
}

#[test]
fn attach_honours_the_configured_direction() {
    let (dismissed, host) = counting_host();
    let config = PanelConfig::builder()
        .direction(Direction::Bottom)
        .build()
        .expect("valid config");
    let panel = Sliding::attach(surface(), Some(config), host);
    let mut robot = GestureRobot::new(panel, Routing::Direct);

    robot.drag(1, Point::new(400.0, 1100.0), Point::new(400.0, 600.0), 10);
    assert_eq!(robot.panel().content_offset(), sliding_ui_graphics::IntOffset::new(0, -500));
    robot.pump_frames();

    assert_eq!(robot.panel().content_offset().y, -1200);
    assert_eq!(dismissed.get(), 1);
}
