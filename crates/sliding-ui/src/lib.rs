//! Slide-to-dismiss panels for Sliding
//!
//! A [`SliderPanel`] wraps a content view that can be pulled aside in one of
//! six [`Direction`]s. It feeds the host's pointer events to a
//! [`DragHelper`](sliding_foundation::DragHelper), decides where the content
//! settles on release, and republishes progress as a slide percentage and a
//! scrim color through a [`PanelSlideListener`].

mod attach;
mod clock;
mod config;
mod direction;
mod listener;
mod panel;
mod policy;
mod scrim;
mod surface;

pub use attach::{Sliding, SlidingInterface};
pub use clock::{FrameClock, SystemFrameClock};
pub use config::{ConfigError, PanelConfig, PanelConfigBuilder};
pub use direction::Direction;
pub use listener::{ConfigPanelSlideListener, PanelSlideListener, SlideListener, SlidingHost};
pub use panel::{SliderPanel, PANEL_MIN_FLING_VELOCITY};
pub use policy::{Axis, DirectionPolicy, ReleaseThresholds, Reveal};
pub use scrim::{Scrim, ScrimRenderer};
pub use sliding_foundation::DragState;
pub use surface::PanelSurface;

pub mod prelude {
    pub use crate::attach::{Sliding, SlidingInterface};
    pub use crate::config::PanelConfig;
    pub use crate::direction::Direction;
    pub use crate::listener::{SlideListener, SlidingHost};
    pub use crate::panel::SliderPanel;
    pub use crate::surface::PanelSurface;
    pub use sliding_foundation::{DragState, PointerEvent};
}
