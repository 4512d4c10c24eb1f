//! Pointer input, velocity tracking and the drag capture engine for Sliding
//!
//! The [`DragHelper`] tracks every pointer the host forwards, decides when a
//! touch becomes a drag of one of the children of its [`DragContainer`], and
//! simulates the settle or fling that follows the release. All policy (which
//! child may be captured, how far it may move, where it settles) comes from a
//! [`DragCallback`].

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod velocity_tracker;

pub use gestures::{
    DragAxes, DragCallback, DragChild, DragContainer, DragHelper, DragState, EdgeFlags,
    PointerState, ViewId,
};
pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::{PointerVelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::gestures::{
        DragCallback, DragContainer, DragHelper, DragState, EdgeFlags, ViewId,
    };
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId};
}
