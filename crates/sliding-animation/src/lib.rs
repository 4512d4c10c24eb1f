//! Settle and fling motion simulation for Sliding
//!
//! Provides the easing curves, the Android-feel fling spline and the
//! frame-driven [`Scroller`] that the drag helper advances while a released
//! view settles.

mod decay_spec;
mod easing;
mod scroller;

pub use decay_spec::*;
pub use easing::*;
pub use scroller::*;
