use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Set of container edges, used both for edges a pointer touched down near
/// and for edges the helper is tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeFlags(u8);

impl EdgeFlags {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const TOP: Self = Self(1 << 2);
    pub const BOTTOM: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every edge in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl Default for EdgeFlags {
    fn default() -> Self {
        Self::NONE
    }
}

impl BitOr for EdgeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for EdgeFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_and_queries_edges() {
        let mut edges = EdgeFlags::LEFT | EdgeFlags::TOP;
        assert!(edges.contains(EdgeFlags::LEFT));
        assert!(!edges.contains(EdgeFlags::LEFT | EdgeFlags::RIGHT));
        assert!(edges.intersects(EdgeFlags::LEFT | EdgeFlags::RIGHT));
        edges.remove(EdgeFlags::LEFT);
        assert_eq!(edges, EdgeFlags::TOP);
        edges |= EdgeFlags::BOTTOM;
        assert_eq!(edges & EdgeFlags::ALL, EdgeFlags::TOP | EdgeFlags::BOTTOM);
        assert!(EdgeFlags::default().is_empty());
    }
}
