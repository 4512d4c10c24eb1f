use sliding_ui_graphics::{Color, IntRect, IntSize};

use crate::config::PanelConfig;
use crate::direction::Direction;

/// What to paint behind the content: the uncovered region and its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrim {
    pub rect: IntRect,
    pub color: Color,
}

/// Fades the scrim between a start and an end alpha as the panel opens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrimRenderer {
    color: Color,
    start_alpha: f32,
    end_alpha: f32,
}

impl ScrimRenderer {
    pub fn new(color: Color, start_alpha: f32, end_alpha: f32) -> Self {
        Self {
            color,
            start_alpha,
            end_alpha,
        }
    }

    pub fn from_config(config: &PanelConfig) -> Self {
        Self::new(
            config.scrim_color(),
            config.scrim_start_alpha(),
            config.scrim_end_alpha(),
        )
    }

    /// Linear from `start_alpha` at 0 to `end_alpha` at 1.
    pub fn alpha(&self, percent: f32) -> f32 {
        let percent = percent.clamp(0.0, 1.0);
        self.start_alpha + (self.end_alpha - self.start_alpha) * percent
    }

    pub fn color(&self, percent: f32) -> Color {
        self.color.with_alpha(self.alpha(percent))
    }

    /// Part of the surface left uncovered by `content`. Bidirectional panels
    /// pick the side currently showing.
    pub fn scrim_rect(direction: Direction, surface: IntSize, content: IntRect) -> IntRect {
        let left_strip = IntRect::new(0, 0, content.left, surface.height);
        let right_strip = IntRect::new(content.right, 0, surface.width, surface.height);
        let top_strip = IntRect::new(0, 0, surface.width, content.top);
        let bottom_strip = IntRect::new(0, content.bottom, surface.width, surface.height);
        match direction {
            Direction::Left => left_strip,
            Direction::Right => right_strip,
            Direction::Top => top_strip,
            Direction::Bottom => bottom_strip,
            Direction::Vertical if content.top > 0 => top_strip,
            Direction::Vertical => bottom_strip,
            Direction::Horizontal if content.left > 0 => left_strip,
            Direction::Horizontal => right_strip,
        }
    }

    pub fn scrim(&self, direction: Direction, surface: IntSize, content: IntRect, percent: f32) -> Scrim {
        Scrim {
            rect: Self::scrim_rect(direction, surface, content),
            color: self.color(percent),
        }
    }
}
