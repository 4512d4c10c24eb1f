use crate::config::PanelConfig;
use crate::listener::{ConfigPanelSlideListener, SlidingHost};
use crate::panel::SliderPanel;
use crate::surface::PanelSurface;

/// Control surface handed back by [`Sliding::attach`].
pub trait SlidingInterface {
    /// Stops any motion and ignores touches until unlocked.
    fn lock(&mut self);

    /// Stops any motion and accepts touches again.
    fn unlock(&mut self);
}

impl SlidingInterface for SliderPanel {
    fn lock(&mut self) {
        SliderPanel::lock(self);
    }

    fn unlock(&mut self) {
        SliderPanel::unlock(self);
    }
}

pub struct Sliding;

impl Sliding {
    /// Wraps the content described by `surface` in a slide-to-dismiss panel.
    ///
    /// Without a config the defaults apply. Closing the panel dismisses
    /// `host` unless the config's listener vetoes it.
    pub fn attach<H: SlidingHost + 'static>(
        surface: PanelSurface,
        config: Option<PanelConfig>,
        host: H,
    ) -> SliderPanel {
        let config = config.unwrap_or_default();
        log::debug!(
            "attaching {:?} panel to {}x{} surface",
            config.direction(),
            surface.size.width,
            surface.size.height
        );
        let listener = ConfigPanelSlideListener::new(config.listener(), host);
        SliderPanel::new(surface, config, Box::new(listener))
    }
}
