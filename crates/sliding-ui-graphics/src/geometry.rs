//! Geometric primitives: Point, Size, and the integer layout types

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Whole-pixel offset of a laid out view relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntOffset {
    pub x: i32,
    pub y: i32,
}

impl IntOffset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const ZERO: IntOffset = IntOffset { x: 0, y: 0 };
}

impl Add for IntOffset {
    type Output = IntOffset;

    fn add(self, rhs: Self) -> Self::Output {
        IntOffset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for IntOffset {
    type Output = IntOffset;

    fn sub(self, rhs: Self) -> Self::Output {
        IntOffset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const ZERO: IntSize = IntSize {
        width: 0,
        height: 0,
    };

    pub fn to_size(self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Integer rectangle with exclusive right/bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_origin_size(origin: IntOffset, size: IntSize) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    pub fn from_size(size: IntSize) -> Self {
        Self::from_origin_size(IntOffset::ZERO, size)
    }

    pub fn origin(&self) -> IntOffset {
        IntOffset::new(self.left, self.top)
    }

    pub fn size(&self) -> IntSize {
        IntSize::new(self.width(), self.height())
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Keeps the origin and replaces the size.
    pub fn with_size(&self, size: IntSize) -> Self {
        Self::from_origin_size(self.origin(), size)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_rect_contains_excludes_far_edges() {
        let rect = IntRect::from_size(IntSize::new(100, 50));
        assert!(rect.contains(0, 0));
        assert!(rect.contains(99, 49));
        assert!(!rect.contains(100, 10));
        assert!(!rect.contains(10, 50));
        assert!(!rect.contains(-1, 10));
    }

    #[test]
    fn translate_keeps_size() {
        let rect = IntRect::from_size(IntSize::new(100, 50)).translate(-30, 12);
        assert_eq!(rect.origin(), IntOffset::new(-30, 12));
        assert_eq!(rect.size(), IntSize::new(100, 50));
    }

    #[test]
    fn with_size_keeps_origin() {
        let rect = IntRect::new(40, 0, 140, 50).with_size(IntSize::new(10, 10));
        assert_eq!(rect, IntRect::new(40, 0, 50, 10));
        assert!(IntRect::new(5, 5, 5, 9).is_empty());
    }
}
