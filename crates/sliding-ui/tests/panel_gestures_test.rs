//! Gesture scenarios driven through the host routing of a real panel.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sliding_testing::{GestureRobot, Routing};
use sliding_ui::{
    Direction, DragState, PanelConfig, PanelConfigBuilder, PanelSurface, SlideListener, Sliding,
    SliderPanel,
};
use sliding_ui_graphics::{IntRect, IntSize, Point};

const SIZE: i32 = 1000;
const CONTENT: usize = 7;

#[derive(Default)]
struct Recorder {
    veto: Cell<bool>,
    states: RefCell<Vec<DragState>>,
    percents: RefCell<Vec<f32>>,
    opened: Cell<u32>,
    closed: Cell<u32>,
}

impl SlideListener for Recorder {
    fn on_slide_state_changed(&self, state: DragState) {
        self.states.borrow_mut().push(state);
    }

    fn on_slide_change(&self, percent: f32) {
        self.percents.borrow_mut().push(percent);
    }

    fn on_slide_opened(&self) {
        self.opened.set(self.opened.get() + 1);
    }

    fn on_slide_closed(&self) -> bool {
        self.closed.set(self.closed.get() + 1);
        self.veto.get()
    }
}

struct Harness {
    robot: GestureRobot,
    recorder: Rc<Recorder>,
    dismissed: Rc<Cell<u32>>,
}

fn harness(builder: PanelConfigBuilder, routing: Routing) -> Harness {
    harness_with_size(builder, routing, IntSize::new(SIZE, SIZE))
}

fn harness_with_size(builder: PanelConfigBuilder, routing: Routing, size: IntSize) -> Harness {
    let recorder = Rc::new(Recorder::default());
    let dismissed = Rc::new(Cell::new(0));
    let counter = dismissed.clone();
    let config = builder
        .listener(recorder.clone())
        .build()
        .expect("valid config");
    let surface = PanelSurface::new(size).with_content(CONTENT);
    let panel = Sliding::attach(surface, Some(config), move || counter.set(counter.get() + 1));
    Harness {
        robot: GestureRobot::new(panel, routing),
        recorder,
        dismissed,
    }
}

fn scenario_config() -> PanelConfigBuilder {
    PanelConfig::builder()
        .direction(Direction::Left)
        .distance_threshold(0.25)
        .velocity_threshold(2400.0)
}

fn main_offset(panel: &SliderPanel) -> i32 {
    let offset = panel.content_offset();
    if panel.direction().is_horizontal() {
        offset.x
    } else {
        offset.y
    }
}

// Point `distance` px from the center along the panel's axis.
fn along(direction: Direction, distance: f32) -> Point {
    let center = SIZE as f32 / 2.0;
    if direction.is_horizontal() {
        Point::new(center + distance, center)
    } else {
        Point::new(center, center + distance)
    }
}

fn open_signs(direction: Direction) -> &'static [i32] {
    match direction {
        Direction::Left | Direction::Top => &[1],
        Direction::Right | Direction::Bottom => &[-1],
        Direction::Vertical | Direction::Horizontal => &[1, -1],
    }
}

#[test]
fn slow_release_past_threshold_opens() {
    let mut h = harness(scenario_config(), Routing::Direct);

    h.robot
        .drag(1, Point::new(10.0, 500.0), Point::new(310.0, 500.0), 10);
    assert_eq!(h.robot.panel().content_offset().x, 300);
    assert_eq!(h.robot.panel().drag_state(), DragState::Settling);

    assert!(h.robot.pump_frames() > 1);
    let panel = h.robot.panel();
    assert_eq!(panel.content_offset().x, 1000);
    assert_eq!(panel.drag_state(), DragState::Idle);
    assert_eq!(panel.slide_percent(), 1.0);
    assert_eq!(h.recorder.closed.get(), 1);
    assert_eq!(h.dismissed.get(), 1);
}

#[test]
fn slow_release_short_of_threshold_closes() {
    let mut h = harness(scenario_config(), Routing::Direct);

    h.robot
        .drag(1, Point::new(10.0, 500.0), Point::new(110.0, 500.0), 10);
    assert_eq!(h.robot.panel().content_offset().x, 100);

    h.robot.pump_frames();
    assert_eq!(h.robot.panel().content_offset().x, 0);
    assert_eq!(h.robot.panel().drag_state(), DragState::Idle);
    assert_eq!(h.recorder.opened.get(), 1);
    assert_eq!(h.recorder.closed.get(), 0);
    assert_eq!(h.dismissed.get(), 0);
}

#[test]
fn fast_release_overrides_short_distance() {
    let mut h = harness(scenario_config(), Routing::Direct);

    h.robot
        .fling(1, Point::new(10.0, 500.0), Point::new(60.0, 500.0), 5, 3);
    assert_eq!(h.robot.panel().content_offset().x, 50);

    h.robot.pump_frames();
    assert_eq!(h.robot.panel().content_offset().x, 1000);
}

#[test]
fn every_direction_honours_distance_threshold() {
    for direction in Direction::ALL {
        for &sign in open_signs(direction) {
            for (threshold, expected) in [(0.24, SIZE * sign), (0.26, 0)] {
                let config = PanelConfig::builder()
                    .direction(direction)
                    .distance_threshold(threshold);
                let mut h = harness(config, Routing::Direct);
                let from = along(direction, 0.0);
                let to = along(direction, 250.0 * sign as f32);

                h.robot.drag(1, from, to, 10);
                assert_eq!(main_offset(h.robot.panel()), 250 * sign, "{direction:?}");
                h.robot.pump_frames();
                assert_eq!(
                    main_offset(h.robot.panel()),
                    expected,
                    "{direction:?} sign {sign} threshold {threshold}"
                );
            }
        }
    }
}

#[test]
fn offsets_stay_inside_direction_bounds() {
    for direction in Direction::ALL {
        let mut h = harness(PanelConfig::builder().direction(direction), Routing::Direct);
        let (min, max) = match open_signs(direction) {
            [1] => (0, SIZE),
            [-1] => (-SIZE, 0),
            _ => (-SIZE, SIZE),
        };

        let start = along(direction, 0.0);
        h.robot.down(1, start.x, start.y);
        for distance in [3000.0, -3000.0, 800.0, -800.0] {
            let target = along(direction, distance);
            h.robot.move_to(1, target.x, target.y);
            let offset = main_offset(h.robot.panel());
            assert!((min..=max).contains(&offset), "{direction:?}: {offset}");
            let cross = if direction.is_horizontal() {
                h.robot.panel().content_offset().y
            } else {
                h.robot.panel().content_offset().x
            };
            assert_eq!(cross, 0);
        }
    }
}

#[test]
fn percent_stream_is_monotonic_and_bounded() {
    let mut h = harness(PanelConfig::builder(), Routing::Direct);

    h.robot
        .drag(1, Point::new(10.0, 500.0), Point::new(1500.0, 500.0), 30);
    let percents = h.recorder.percents.borrow().clone();

    assert!(!percents.is_empty());
    assert!(percents.iter().all(|p| (0.0..=1.0).contains(p)));
    assert!(percents.windows(2).all(|pair| pair[1] >= pair[0]));
    assert_eq!(percents.last().copied(), Some(1.0));
}

#[test]
fn scrim_fades_from_start_to_end_alpha() {
    let config = PanelConfig::builder()
        .scrim_start_alpha(0.8)
        .scrim_end_alpha(0.0);
    let mut h = harness(config, Routing::Direct);

    let at_rest = h.robot.panel().scrim();
    assert!((at_rest.color.a() - 0.8).abs() < 1e-6);
    assert_eq!(at_rest.rect, IntRect::new(0, 0, 0, SIZE));

    h.robot.down(1, 10.0, 500.0).move_to(1, 510.0, 500.0);
    let halfway = h.robot.panel().scrim();
    assert!((halfway.color.a() - 0.4).abs() < 1e-6);
    assert_eq!(halfway.rect, IntRect::new(0, 0, 500, SIZE));

    h.robot.move_to(1, 1010.0, 500.0);
    let open = h.robot.panel().scrim();
    assert!(open.color.a().abs() < 1e-6);
    assert_eq!(open.rect, IntRect::new(0, 0, SIZE, SIZE));
}

#[test]
fn lock_aborts_settle_and_stops_frames() {
    let mut h = harness(scenario_config(), Routing::Direct);
    h.robot
        .drag(1, Point::new(10.0, 500.0), Point::new(310.0, 500.0), 10);
    assert_eq!(h.robot.panel().drag_state(), DragState::Settling);

    h.robot.panel_mut().lock();
    assert_eq!(h.robot.panel().drag_state(), DragState::Idle);
    assert_eq!(h.robot.panel().content_offset().x, 1000);
    assert_eq!(h.robot.pump_frames(), 0);
}

#[test]
fn lock_while_dragging_goes_idle() {
    let mut h = harness(scenario_config(), Routing::Direct);
    h.robot.down(1, 10.0, 500.0).move_to(1, 60.0, 500.0);
    assert_eq!(h.robot.panel().drag_state(), DragState::Dragging);

    h.robot.panel_mut().lock();
    assert_eq!(h.robot.panel().drag_state(), DragState::Idle);
    assert_eq!(h.robot.pump_frames(), 0);
}

#[test]
fn lock_and_unlock_are_idempotent() {
    let mut h = harness(PanelConfig::builder(), Routing::Direct);

    h.robot.panel_mut().lock();
    let states = h.recorder.states.borrow().len();
    h.robot.panel_mut().lock();
    assert!(h.robot.panel().is_locked());
    assert_eq!(h.recorder.states.borrow().len(), states);

    h.robot
        .drag(1, Point::new(10.0, 500.0), Point::new(600.0, 500.0), 10);
    assert_eq!(h.robot.panel().content_offset().x, 0);
    assert_eq!(h.robot.panel().drag_state(), DragState::Idle);

    h.robot.panel_mut().unlock();
    h.robot.panel_mut().unlock();
    assert!(!h.robot.panel().is_locked());
    assert_eq!(h.recorder.states.borrow().len(), states);

    h.robot
        .drag(1, Point::new(10.0, 500.0), Point::new(600.0, 500.0), 10);
    assert_eq!(h.robot.panel().content_offset().x, 590);
}

#[test]
fn closed_listener_can_veto_dismissal() {
    let mut h = harness(scenario_config(), Routing::Direct);
    h.recorder.veto.set(true);

    h.robot
        .drag(1, Point::new(10.0, 500.0), Point::new(400.0, 500.0), 10);
    h.robot.pump_frames();

    assert_eq!(h.recorder.closed.get(), 1);
    assert_eq!(h.dismissed.get(), 0);
}

#[test]
fn edge_only_ignores_gestures_away_from_the_edge() {
    let config = PanelConfig::builder().edge_only(true).edge_size(0.1);
    let mut h = harness(config, Routing::Direct);

    h.robot
        .drag(1, Point::new(500.0, 500.0), Point::new(900.0, 500.0), 10);
    assert_eq!(h.robot.panel().content_offset().x, 0);
    assert!(h.recorder.states.borrow().is_empty());

    h.robot
        .drag(1, Point::new(50.0, 500.0), Point::new(450.0, 500.0), 10);
    assert_eq!(h.robot.panel().content_offset().x, 400);
}

#[test]
fn edge_only_bottom_panel_starts_near_bottom_edge() {
    let config = PanelConfig::builder()
        .direction(Direction::Bottom)
        .edge_only(true)
        .edge_size(0.1);
    let mut h = harness(config, Routing::ChildConsumes);

    h.robot
        .drag(1, Point::new(500.0, 500.0), Point::new(500.0, 100.0), 10);
    assert!(!h.robot.intercepted());

    h.robot
        .drag(1, Point::new(500.0, 950.0), Point::new(500.0, 550.0), 10);
    assert!(h.robot.intercepted());
    assert!(h.robot.panel().content_offset().y < -250);
}

#[test]
fn second_pointer_waits_until_the_driver_lifts() {
    let mut h = harness(scenario_config(), Routing::Direct);

    h.robot.down(1, 100.0, 500.0).move_to(1, 200.0, 500.0);
    assert_eq!(h.robot.panel().content_offset().x, 100);

    h.robot.down(2, 600.0, 500.0).move_to(1, 300.0, 500.0);
    assert_eq!(h.robot.panel().content_offset().x, 200);
    h.robot.move_to(2, 650.0, 500.0);
    assert_eq!(h.robot.panel().content_offset().x, 200);

    h.robot.up(1, 300.0, 500.0);
    assert_eq!(h.robot.panel().drag_state(), DragState::Dragging);
    h.robot.move_to(2, 750.0, 500.0);
    assert_eq!(h.robot.panel().content_offset().x, 300);

    h.robot.hold(60).move_to(2, 750.0, 500.0).up(2, 750.0, 500.0);
    h.robot.pump_frames();
    assert_eq!(h.robot.panel().content_offset().x, 1000);
}

#[test]
fn touch_size_sets_the_edge_band() {
    let wide_touch = PanelConfig::builder()
        .edge_only(true)
        .edge_size(0.05)
        .touch_size(200.0);
    let mut h = harness(wide_touch, Routing::Direct);
    h.robot
        .drag(1, Point::new(150.0, 500.0), Point::new(450.0, 500.0), 10);
    assert_eq!(h.robot.panel().content_offset().x, 300);

    let narrow_touch = PanelConfig::builder()
        .edge_only(true)
        .edge_size(0.3)
        .touch_size(20.0);
    let mut h = harness(narrow_touch, Routing::Direct);
    h.robot
        .drag(1, Point::new(150.0, 500.0), Point::new(450.0, 500.0), 10);
    assert_eq!(h.robot.panel().content_offset().x, 0);
    assert!(h.recorder.states.borrow().is_empty());
}

#[test]
fn huge_pointer_coordinates_pin_the_panel_to_its_bounds() {
    let mut h = harness(scenario_config(), Routing::Direct);

    h.robot.down(1, 100.0, 500.0).move_to(1, 200.0, 500.0);
    h.robot.move_to(1, 4.0e9, 500.0);
    assert_eq!(h.robot.panel().content_offset().x, SIZE);

    h.robot.move_to(1, -4.0e9, 500.0);
    assert_eq!(h.robot.panel().content_offset().x, 0);
    assert_eq!(h.robot.panel().drag_state(), DragState::Dragging);
}

#[test]
fn moves_from_unknown_pointers_are_ignored() {
    let mut h = harness(PanelConfig::builder(), Routing::Direct);

    h.robot.down(1, 100.0, 500.0);
    h.robot.move_to(9, 900.0, 500.0);
    assert_eq!(h.robot.panel().content_offset().x, 0);

    h.robot.move_to(1, 150.0, 500.0);
    assert_eq!(h.robot.panel().content_offset().x, 50);
}

#[test]
fn intercept_takes_over_a_child_gesture_past_slop() {
    let mut h = harness(scenario_config(), Routing::ChildConsumes);

    h.robot
        .drag(1, Point::new(100.0, 500.0), Point::new(500.0, 500.0), 10);
    assert!(h.robot.intercepted());
    assert_eq!(h.robot.panel().content_offset().x, 360);

    h.robot.pump_frames();
    assert_eq!(h.robot.panel().content_offset().x, 1000);
}

#[test]
fn cancel_settles_from_current_offset() {
    let mut h = harness(scenario_config(), Routing::Direct);

    h.robot
        .down(1, 10.0, 500.0)
        .move_to(1, 110.0, 500.0)
        .cancel(1, 110.0, 500.0);
    assert_eq!(h.robot.panel().drag_state(), DragState::Settling);

    h.robot.pump_frames();
    assert_eq!(h.robot.panel().content_offset().x, 0);
}

#[test]
fn zero_height_surface_is_tolerated_until_layout() {
    let config = PanelConfig::builder().direction(Direction::Top);
    let mut h = harness_with_size(config, Routing::Direct, IntSize::new(SIZE, 0));

    h.robot
        .drag(1, Point::new(500.0, 0.0), Point::new(500.0, 400.0), 10);
    h.robot.pump_frames();
    assert_eq!(h.robot.panel().content_offset().y, 0);
    assert_eq!(h.robot.panel().slide_percent(), 0.0);

    h.robot.panel_mut().set_surface_size(IntSize::new(SIZE, SIZE));
    h.robot
        .drag(1, Point::new(500.0, 100.0), Point::new(500.0, 500.0), 10);
    assert_eq!(h.robot.panel().content_offset().y, 400);
    h.robot.pump_frames();
    assert_eq!(h.robot.panel().content_offset().y, SIZE);
}
