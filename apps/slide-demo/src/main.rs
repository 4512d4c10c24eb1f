use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{ensure, Context};
use sliding_foundation::{DragState, PointerEvent, PointerEventKind};
use sliding_ui::{
    Direction, FrameClock, PanelConfig, PanelSurface, SlideListener, Sliding, SliderPanel,
    SystemFrameClock,
};
use sliding_ui_graphics::{IntSize, Point};

const SURFACE: IntSize = IntSize {
    width: 1080,
    height: 1920,
};
const MOVE_INTERVAL_MS: i64 = 16;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Prints the listener stream, throttling percent updates to every tenth.
#[derive(Default)]
struct LoggingListener {
    last_decile: Cell<i32>,
}

impl SlideListener for LoggingListener {
    fn on_slide_state_changed(&self, state: DragState) {
        log::info!("state -> {state:?}");
    }

    fn on_slide_change(&self, percent: f32) {
        let decile = (percent * 10.0) as i32;
        if decile != self.last_decile.replace(decile) {
            log::info!("revealed {:.0}%", percent * 100.0);
        }
    }

    fn on_slide_opened(&self) {
        log::info!("content back in place");
    }

    fn on_slide_closed(&self) -> bool {
        log::info!("content slid away");
        false
    }
}

struct Script {
    panel: SliderPanel,
    clock: SystemFrameClock,
    uptime_ms: i64,
}

impl Script {
    fn send(&mut self, event: PointerEvent) {
        let event = event.at(self.uptime_ms);
        // Nothing else on screen wants the gesture, so the panel handles it
        // from the first down.
        if event.kind == PointerEventKind::Down {
            self.panel.should_intercept(&event);
        }
        self.panel.process_event(&event);
    }

    fn swipe(&mut self, from: Point, to: Point, steps: u32, rest_ms: i64) {
        log::info!("swipe ({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y);
        self.send(PointerEvent::down(1, from.x, from.y));
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.uptime_ms += MOVE_INTERVAL_MS;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.send(PointerEvent::moved(1, x, y));
        }
        if rest_ms > 0 {
            self.uptime_ms += rest_ms;
            self.send(PointerEvent::moved(1, to.x, to.y));
        }
        self.send(PointerEvent::up(1, to.x, to.y));
    }

    fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.panel.compute_scroll(self.clock.frame_time_nanos()) {
            frames += 1;
            std::thread::sleep(FRAME_INTERVAL);
        }
        log::info!(
            "settled at {:?} after {frames} frames",
            self.panel.content_offset()
        );
        frames
    }
}

fn run(
    direction: Direction,
    from: Point,
    to: Point,
    steps: u32,
    rest_ms: i64,
) -> anyhow::Result<u32> {
    let dismissed = Rc::new(Cell::new(0));
    let counter = dismissed.clone();
    let config = PanelConfig::builder()
        .direction(direction)
        .velocity_threshold(2400.0)
        .listener(Rc::new(LoggingListener::default()))
        .build()
        .context("panel config rejected")?;
    log::debug!("{config:?}");

    let panel = Sliding::attach(
        PanelSurface::new(SURFACE).with_content(1),
        Some(config),
        move || counter.set(counter.get() + 1),
    );
    let mut script = Script {
        panel,
        clock: SystemFrameClock::new(),
        uptime_ms: 0,
    };
    script.swipe(from, to, steps, rest_ms);
    script.settle();
    ensure!(
        script.panel.drag_state() == DragState::Idle,
        "panel still {:?} after settling",
        script.panel.drag_state()
    );
    Ok(dismissed.get())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Sliding panel demo ===");

    println!("\n--- Slow drag past a quarter of the width ---");
    let dismissed = run(
        Direction::Left,
        Point::new(40.0, 900.0),
        Point::new(400.0, 900.0),
        12,
        80,
    )?;
    println!("host dismissed {dismissed} time(s)");

    println!("\n--- Short drag that springs back ---");
    let dismissed = run(
        Direction::Left,
        Point::new(40.0, 900.0),
        Point::new(160.0, 900.0),
        12,
        80,
    )?;
    println!("host dismissed {dismissed} time(s)");

    println!("\n--- Quick flick up on a bottom panel ---");
    let dismissed = run(
        Direction::Bottom,
        Point::new(540.0, 1800.0),
        Point::new(540.0, 1500.0),
        4,
        0,
    )?;
    println!("host dismissed {dismissed} time(s)");

    Ok(())
}
