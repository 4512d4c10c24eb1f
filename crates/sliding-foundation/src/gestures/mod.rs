mod callback;
mod container;
mod drag_helper;
mod edge;
mod pointer_state;

pub use callback::DragCallback;
pub use container::{DragChild, DragContainer, ViewId};
pub use drag_helper::{DragAxes, DragHelper, DragState};
pub use edge::EdgeFlags;
pub use pointer_state::PointerState;
