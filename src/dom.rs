use hero_core::{HostError, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), HostError> {
    let window = web::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    Ok((window, document))
}

#[inline]
pub fn js_err(e: JsValue) -> HostError {
    HostError::Js(format!("{:?}", e))
}

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn canvas(document: &web::Document, id: &str) -> Result<web::HtmlCanvasElement, HostError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::MissingElement(id.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| HostError::MissingElement(id.to_string()))
}

/// `data-*` value on an element, by dataset key (camelCase).
pub fn dataset_value(document: &web::Document, id: &str, key: &str) -> Option<String> {
    html_element(document, id).and_then(|el| el.dataset().get(key))
}

pub fn viewport(window: &web::Window) -> Viewport {
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(px(window.inner_width()), px(window.inner_height()))
        .with_pixel_ratio(window.device_pixel_ratio())
}

/// Size the canvas backing store to the viewport in device pixels while
/// keeping its CSS box at the viewport size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}
