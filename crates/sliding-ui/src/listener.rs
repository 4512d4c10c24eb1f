use std::rc::Rc;

use sliding_foundation::DragState;

/// User hooks for a panel, supplied through the config.
///
/// Hooks take `&self`; keep any state behind `Cell`/`RefCell`.
pub trait SlideListener {
    fn on_slide_state_changed(&self, _state: DragState) {}

    /// `percent` is the uncovered fraction, 0 at rest and 1 fully revealed.
    fn on_slide_change(&self, _percent: f32) {}

    /// The content came to rest in its natural place.
    fn on_slide_opened(&self) {}

    /// The content came to rest pushed off the surface. Return true to keep
    /// the host alive instead of dismissing it.
    fn on_slide_closed(&self) -> bool {
        false
    }
}

/// Whatever owns the panel and goes away when it is slid closed.
pub trait SlidingHost {
    fn dismiss(&mut self);
}

impl<F: FnMut()> SlidingHost for F {
    fn dismiss(&mut self) {
        self()
    }
}

/// Event stream a [`SliderPanel`](crate::SliderPanel) publishes.
pub trait PanelSlideListener {
    fn on_state_changed(&mut self, state: DragState);
    fn on_closed(&mut self);
    fn on_opened(&mut self);
    fn on_slide_change(&mut self, percent: f32);
}

/// Forwards panel events to the config's [`SlideListener`] and dismisses the
/// host once the panel closes, unless the listener vetoes it.
pub struct ConfigPanelSlideListener<H: SlidingHost> {
    listener: Option<Rc<dyn SlideListener>>,
    host: H,
}

impl<H: SlidingHost> ConfigPanelSlideListener<H> {
    pub fn new(listener: Option<Rc<dyn SlideListener>>, host: H) -> Self {
        Self { listener, host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: SlidingHost> PanelSlideListener for ConfigPanelSlideListener<H> {
    fn on_state_changed(&mut self, state: DragState) {
        if let Some(listener) = &self.listener {
            listener.on_slide_state_changed(state);
        }
    }

    fn on_closed(&mut self) {
        if self
            .listener
            .as_ref()
            .is_some_and(|listener| listener.on_slide_closed())
        {
            log::debug!("panel closed; dismissal vetoed by listener");
            return;
        }
        log::debug!("panel closed; dismissing host");
        self.host.dismiss();
    }

    fn on_opened(&mut self) {
        if let Some(listener) = &self.listener {
            listener.on_slide_opened();
        }
    }

    fn on_slide_change(&mut self, percent: f32) {
        if let Some(listener) = &self.listener {
            listener.on_slide_change(percent);
        }
    }
}
