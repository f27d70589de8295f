use crate::constants::{CANVAS_ID, CONTAINER_ID, INDICATOR_ID, SCROLL_TARGET_ID};
use crate::dom;
use crate::events::EventListener;
use crate::frame::RafFrames;
use crate::indicator;
use crate::render::Canvas2dSurface;
use hero_core::{HeroHost, HostError, HostEvent, Viewport};
use web_sys as web;

/// The browser page the hero is mounted in.
pub struct WebHost {
    window: web::Window,
    document: web::Document,
}

impl WebHost {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    fn target_for(&self, event: HostEvent) -> Result<web::EventTarget, HostError> {
        match event {
            HostEvent::IndicatorClick => dom::html_element(&self.document, INDICATOR_ID)
                .map(Into::into)
                .ok_or_else(|| HostError::MissingElement(INDICATOR_ID.to_string())),
            _ => Ok(self.window.clone().into()),
        }
    }
}

impl HeroHost for WebHost {
    type Listener = EventListener;
    type Frames = RafFrames;
    type Surface = Canvas2dSurface;

    fn viewport(&self) -> Viewport {
        dom::viewport(&self.window)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn container_height(&self) -> Option<f64> {
        self.document
            .get_element_by_id(CONTAINER_ID)
            .map(|el| el.client_height() as f64)
    }

    fn listen(
        &self,
        event: HostEvent,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self::Listener, HostError> {
        let target = self.target_for(event)?;
        EventListener::new(&target, event.name(), event == HostEvent::Scroll, handler)
    }

    fn acquire_surface(&self) -> Result<Self::Surface, HostError> {
        Canvas2dSurface::acquire(dom::canvas(&self.document, CANVAS_ID)?)
    }

    fn frames(&self, on_frame: Box<dyn FnMut()>) -> Self::Frames {
        RafFrames::new(self.window.clone(), on_frame)
    }

    fn prepare_indicator(&self) {
        indicator::install_transition(&self.document);
    }

    fn set_indicator_offset(&self, offset_vh: f64) {
        indicator::set_offset(&self.document, offset_vh);
    }

    fn scroll_target_into_view(&self) {
        indicator::scroll_into_view(&self.document, SCROLL_TARGET_ID);
    }
}
