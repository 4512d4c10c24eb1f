//! Easing curves applied to eased scrolls.

/// Maps a linear time fraction onto a progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// `(t - 1)^5 + 1`: fast start, long soft landing. Used for settling.
    #[default]
    QuinticEaseOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => t,
            Easing::QuinticEaseOut => {
                let t = t - 1.0;
                t * t * t * t * t + 1.0
            }
        }
    }
}
