use smallvec::SmallVec;
use sliding_ui_graphics::{IntOffset, IntRect, IntSize};

/// Identifies a draggable child inside a [`DragContainer`].
pub type ViewId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragChild {
    pub id: ViewId,
    /// Bounds in container coordinates.
    pub bounds: IntRect,
}

impl DragChild {
    pub fn offset(&self) -> IntOffset {
        self.bounds.origin()
    }
}

/// The surface the drag helper works in: its size, used for edge detection
/// and settle timing, and the children that can be captured. Children are
/// stored bottom to top.
#[derive(Clone, Debug, Default)]
pub struct DragContainer {
    size: IntSize,
    children: SmallVec<[DragChild; 2]>,
}

impl DragContainer {
    pub fn new(size: IntSize) -> Self {
        Self {
            size,
            children: SmallVec::new(),
        }
    }

    pub fn with_child(mut self, id: ViewId, bounds: IntRect) -> Self {
        self.add_child(id, bounds);
        self
    }

    pub fn size(&self) -> IntSize {
        self.size
    }

    pub fn set_size(&mut self, size: IntSize) {
        self.size = size;
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Adds a child on top of the others, or replaces the bounds of an
    /// existing one in place.
    pub fn add_child(&mut self, id: ViewId, bounds: IntRect) {
        match self.children.iter_mut().find(|child| child.id == id) {
            Some(child) => child.bounds = bounds,
            None => self.children.push(DragChild { id, bounds }),
        }
    }

    pub fn remove_child(&mut self, id: ViewId) -> Option<DragChild> {
        let index = self.children.iter().position(|child| child.id == id)?;
        Some(self.children.remove(index))
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.children.iter().any(|child| child.id == id)
    }

    pub fn child(&self, id: ViewId) -> Option<&DragChild> {
        self.children.iter().find(|child| child.id == id)
    }

    pub fn child_at(&self, index: usize) -> Option<&DragChild> {
        self.children.get(index)
    }

    pub fn children(&self) -> &[DragChild] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Moves a child by the given delta. Unknown ids are ignored.
    pub fn offset_child(&mut self, id: ViewId, dx: i32, dy: i32) {
        if let Some(child) = self.children.iter_mut().find(|child| child.id == id) {
            child.bounds = child.bounds.translate(dx, dy);
        }
    }

    /// Places a child's top-left corner at `offset`, keeping its size.
    pub fn move_child_to(&mut self, id: ViewId, offset: IntOffset) {
        if let Some(child) = self.children.iter_mut().find(|child| child.id == id) {
            child.bounds = IntRect::from_origin_size(offset, child.bounds.size());
        }
    }
}
