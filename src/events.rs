use crate::dom::js_err;
use hero_core::HostError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM listener that removes itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self, HostError> {
        let closure = Closure::wrap(handler);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    fn callback(&self) -> &js_sys::Function {
        self.closure.as_ref().unchecked_ref()
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback())
        {
            log::warn!("[events] could not remove {} listener: {:?}", self.kind, e);
        }
    }
}
