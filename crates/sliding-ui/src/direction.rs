use sliding_foundation::EdgeFlags;

/// Edge the content is pulled away from.
///
/// `Left` means the gesture starts on the left and the content slides right,
/// uncovering the left side of the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
    /// Content slides up or down.
    Vertical,
    /// Content slides left or right.
    Horizontal,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
        Direction::Vertical,
        Direction::Horizontal,
    ];

    /// Edges whose touches the drag helper should track.
    pub fn edges(self) -> EdgeFlags {
        match self {
            Direction::Left => EdgeFlags::LEFT,
            Direction::Right => EdgeFlags::RIGHT,
            Direction::Top => EdgeFlags::TOP,
            Direction::Bottom => EdgeFlags::BOTTOM,
            Direction::Vertical => EdgeFlags::TOP | EdgeFlags::BOTTOM,
            Direction::Horizontal => EdgeFlags::LEFT | EdgeFlags::RIGHT,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right | Direction::Horizontal)
    }

    pub fn is_bidirectional(self) -> bool {
        matches!(self, Direction::Vertical | Direction::Horizontal)
    }
}
