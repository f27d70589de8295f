use crate::dom::js_err;
use hero_core::{FrameHost, FrameId, HostError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` frame source. The closure lives as long as this
/// value; callers cancel outstanding requests before dropping it.
pub struct RafFrames {
    window: web::Window,
    tick: Closure<dyn FnMut()>,
}

impl RafFrames {
    pub fn new(window: web::Window, on_frame: Box<dyn FnMut()>) -> Self {
        Self {
            window,
            tick: Closure::wrap(on_frame),
        }
    }
}

impl FrameHost for RafFrames {
    fn request_frame(&mut self) -> Result<FrameId, HostError> {
        self.window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
            .map(FrameId)
            .map_err(js_err)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if let Err(e) = self.window.cancel_animation_frame(id.0) {
            log::debug!("[frame] cancel {} failed: {:?}", id.0, e);
        }
    }
}
