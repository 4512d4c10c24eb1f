use std::fmt;
use std::rc::Rc;

use sliding_ui_graphics::Color;

use crate::direction::Direction;
use crate::listener::SlideListener;
use crate::policy::ReleaseThresholds;

/// Panel settings, fixed for the lifetime of a [`SliderPanel`](crate::SliderPanel).
///
/// Fractions (`distance_threshold`, `edge_size`) are resolved against the
/// live surface size each time they are used.
#[derive(Clone)]
pub struct PanelConfig {
    direction: Direction,
    primary_color: Option<Color>,
    secondary_color: Option<Color>,
    touch_size: Option<f32>,
    sensitivity: f32,
    scrim_color: Color,
    scrim_start_alpha: f32,
    scrim_end_alpha: f32,
    velocity_threshold: f32,
    distance_threshold: f32,
    edge_only: bool,
    edge_size: f32,
    listener: Option<Rc<dyn SlideListener>>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Left,
            primary_color: None,
            secondary_color: None,
            touch_size: None,
            sensitivity: 1.0,
            scrim_color: Color::BLACK,
            scrim_start_alpha: 0.8,
            scrim_end_alpha: 0.0,
            velocity_threshold: 5.0,
            distance_threshold: 0.25,
            edge_only: false,
            edge_size: 0.18,
            listener: None,
        }
    }
}

impl fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelConfig")
            .field("direction", &self.direction)
            .field("primary_color", &self.primary_color)
            .field("secondary_color", &self.secondary_color)
            .field("touch_size", &self.touch_size)
            .field("sensitivity", &self.sensitivity)
            .field("scrim_color", &self.scrim_color)
            .field("scrim_start_alpha", &self.scrim_start_alpha)
            .field("scrim_end_alpha", &self.scrim_end_alpha)
            .field("velocity_threshold", &self.velocity_threshold)
            .field("distance_threshold", &self.distance_threshold)
            .field("edge_only", &self.edge_only)
            .field("edge_size", &self.edge_size)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl PanelConfig {
    pub fn builder() -> PanelConfigBuilder {
        PanelConfigBuilder::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Status bar color while the panel is at rest. Not used by the panel itself.
    pub fn primary_color(&self) -> Option<Color> {
        self.primary_color
    }

    /// Status bar color while the panel is open. Not used by the panel itself.
    pub fn secondary_color(&self) -> Option<Color> {
        self.secondary_color
    }

    /// Edge-touch band thickness in px, replacing the drag helper's default.
    pub fn touch_size(&self) -> Option<f32> {
        self.touch_size
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn scrim_color(&self) -> Color {
        self.scrim_color
    }

    pub fn scrim_start_alpha(&self) -> f32 {
        self.scrim_start_alpha
    }

    pub fn scrim_end_alpha(&self) -> f32 {
        self.scrim_end_alpha
    }

    pub fn velocity_threshold(&self) -> f32 {
        self.velocity_threshold
    }

    pub fn distance_threshold(&self) -> f32 {
        self.distance_threshold
    }

    /// Distance threshold in px for a surface dimension.
    pub fn distance_threshold_px(&self, dimension: f32) -> f32 {
        self.distance_threshold * dimension
    }

    pub fn is_edge_only(&self) -> bool {
        self.edge_only
    }

    pub fn edge_size(&self) -> f32 {
        self.edge_size
    }

    /// Edge band thickness in px for a surface dimension.
    pub fn edge_size_px(&self, dimension: f32) -> f32 {
        self.edge_size * dimension
    }

    pub fn listener(&self) -> Option<Rc<dyn SlideListener>> {
        self.listener.clone()
    }

    pub fn release_thresholds(&self) -> ReleaseThresholds {
        ReleaseThresholds {
            velocity: self.velocity_threshold,
            distance: self.distance_threshold,
        }
    }
}

#[derive(Clone, Default)]
pub struct PanelConfigBuilder {
    config: PanelConfig,
}

impl PanelConfigBuilder {
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    pub fn primary_color(mut self, color: Color) -> Self {
        self.config.primary_color = Some(color);
        self
    }

    pub fn secondary_color(mut self, color: Color) -> Self {
        self.config.secondary_color = Some(color);
        self
    }

    /// A size of zero or less leaves the default edge thickness in place.
    pub fn touch_size(mut self, size: f32) -> Self {
        self.config.touch_size = (size > 0.0 || !size.is_finite()).then_some(size);
        self
    }

    pub fn sensitivity(mut self, sensitivity: f32) -> Self {
        self.config.sensitivity = sensitivity;
        self
    }

    pub fn scrim_color(mut self, color: Color) -> Self {
        self.config.scrim_color = color;
        self
    }

    pub fn scrim_start_alpha(mut self, alpha: f32) -> Self {
        self.config.scrim_start_alpha = alpha;
        self
    }

    pub fn scrim_end_alpha(mut self, alpha: f32) -> Self {
        self.config.scrim_end_alpha = alpha;
        self
    }

    pub fn velocity_threshold(mut self, threshold: f32) -> Self {
        self.config.velocity_threshold = threshold;
        self
    }

    pub fn distance_threshold(mut self, threshold: f32) -> Self {
        self.config.distance_threshold = threshold;
        self
    }

    pub fn edge_only(mut self, edge_only: bool) -> Self {
        self.config.edge_only = edge_only;
        self
    }

    pub fn edge_size(mut self, edge_size: f32) -> Self {
        self.config.edge_size = edge_size;
        self
    }

    pub fn listener(mut self, listener: Rc<dyn SlideListener>) -> Self {
        self.config.listener = Some(listener);
        self
    }

    pub fn build(self) -> Result<PanelConfig, ConfigError> {
        let config = self.config;
        if !(0.1..=0.9).contains(&config.distance_threshold) {
            return Err(ConfigError::DistanceThreshold(config.distance_threshold));
        }
        if !(0.0..=1.0).contains(&config.edge_size) {
            return Err(ConfigError::EdgeSize(config.edge_size));
        }
        for alpha in [config.scrim_start_alpha, config.scrim_end_alpha] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ConfigError::ScrimAlpha(alpha));
            }
        }
        if !config.sensitivity.is_finite() || config.sensitivity <= 0.0 {
            return Err(ConfigError::Sensitivity(config.sensitivity));
        }
        if !config.velocity_threshold.is_finite() || config.velocity_threshold < 0.0 {
            return Err(ConfigError::VelocityThreshold(config.velocity_threshold));
        }
        if let Some(size) = config.touch_size.filter(|size| !size.is_finite()) {
            return Err(ConfigError::TouchSize(size));
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    DistanceThreshold(f32),
    EdgeSize(f32),
    ScrimAlpha(f32),
    Sensitivity(f32),
    VelocityThreshold(f32),
    TouchSize(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DistanceThreshold(value) => {
                write!(f, "distance threshold {value} outside [0.1, 0.9]")
            }
            ConfigError::EdgeSize(value) => write!(f, "edge size {value} outside [0.0, 1.0]"),
            ConfigError::ScrimAlpha(value) => write!(f, "scrim alpha {value} outside [0.0, 1.0]"),
            ConfigError::Sensitivity(value) => {
                write!(f, "sensitivity {value} must be finite and positive")
            }
            ConfigError::VelocityThreshold(value) => {
                write!(f, "velocity threshold {value} must be finite and non-negative")
            }
            ConfigError::TouchSize(value) => write!(f, "touch size {value} must be finite"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default_config() {
        let config = PanelConfig::builder().build().expect("defaults are valid");
        let default = PanelConfig::default();
        assert_eq!(config.direction(), Direction::Left);
        assert_eq!(config.direction(), default.direction());
        assert_eq!(config.scrim_start_alpha(), 0.8);
        assert_eq!(config.scrim_end_alpha(), 0.0);
        assert_eq!(config.velocity_threshold(), 5.0);
        assert_eq!(config.distance_threshold(), 0.25);
        assert_eq!(config.edge_size(), 0.18);
        assert_eq!(config.sensitivity(), 1.0);
        assert_eq!(config.touch_size(), None);
        assert!(!config.is_edge_only());
        assert!(config.listener().is_none());
        assert_eq!(config.scrim_color(), Color::BLACK);
    }

    #[test]
    fn fractions_resolve_against_dimension() {
        let config = PanelConfig::builder()
            .distance_threshold(0.5)
            .edge_size(0.1)
            .build()
            .expect("valid config");
        assert_eq!(config.distance_threshold_px(800.0), 400.0);
        assert_eq!(config.edge_size_px(800.0), 80.0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = |builder: PanelConfigBuilder| builder.build().err();
        assert_eq!(
            err(PanelConfig::builder().distance_threshold(0.95)),
            Some(ConfigError::DistanceThreshold(0.95))
        );
        assert_eq!(
            err(PanelConfig::builder().distance_threshold(0.05)),
            Some(ConfigError::DistanceThreshold(0.05))
        );
        assert_eq!(
            err(PanelConfig::builder().edge_size(1.5)),
            Some(ConfigError::EdgeSize(1.5))
        );
        assert_eq!(
            err(PanelConfig::builder().scrim_end_alpha(-0.1)),
            Some(ConfigError::ScrimAlpha(-0.1))
        );
        assert_eq!(
            err(PanelConfig::builder().sensitivity(0.0)),
            Some(ConfigError::Sensitivity(0.0))
        );
        assert_eq!(
            err(PanelConfig::builder().velocity_threshold(-1.0)),
            Some(ConfigError::VelocityThreshold(-1.0))
        );
        assert!(matches!(
            err(PanelConfig::builder().touch_size(f32::INFINITY)),
            Some(ConfigError::TouchSize(_))
        ));
    }

    #[test]
    fn non_positive_touch_size_means_unset() {
        let config = PanelConfig::builder().touch_size(-1.0).build().expect("valid config");
        assert_eq!(config.touch_size(), None);
        let config = PanelConfig::builder().touch_size(32.0).build().expect("valid config");
        assert_eq!(config.touch_size(), Some(32.0));
    }

    #[test]
    fn errors_name_the_offending_value() {
        let message = ConfigError::DistanceThreshold(0.95).to_string();
        assert_eq!(message, "distance threshold 0.95 outside [0.1, 0.9]");
    }
}
