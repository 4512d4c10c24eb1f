//! Pure math/data for geometry and colors in Sliding
//!
//! This crate contains the point, size, rectangle and color primitives
//! shared by the gesture engine and the panel controller.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{IntOffset, IntRect, IntSize, Point, Size};
}
