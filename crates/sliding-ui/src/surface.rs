use sliding_foundation::ViewId;
use sliding_ui_graphics::IntSize;

/// Host-provided metrics for the surface a panel lives in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSurface {
    /// May be zero in either dimension until the host's first layout pass.
    pub size: IntSize,
    /// Physical pixels per logical pixel. Scales slop, edge thickness and
    /// the minimum fling velocity.
    pub density: f32,
    /// Id of the draggable content view.
    pub content: ViewId,
}

impl PanelSurface {
    pub fn new(size: IntSize) -> Self {
        Self {
            size,
            density: 1.0,
            content: 0,
        }
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_content(mut self, content: ViewId) -> Self {
        self.content = content;
        self
    }
}
