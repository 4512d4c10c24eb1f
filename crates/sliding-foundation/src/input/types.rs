use sliding_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A pointer touched down. The first pointer of a gesture starts it.
    Down,
    Move,
    /// A pointer lifted. The last pointer of a gesture ends it.
    Up,
    /// The platform aborted the whole gesture.
    Cancel,
}

/// One pointer's state change, in container-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic event timestamp used for velocity tracking.
    pub uptime_ms: i64,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point) -> Self {
        Self {
            id,
            kind,
            position,
            uptime_ms: 0,
        }
    }

    /// Set the event timestamp
    pub fn at(mut self, uptime_ms: i64) -> Self {
        self.uptime_ms = uptime_ms;
        self
    }

    pub fn down(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Cancel, Point::new(x, y))
    }
}
