use crate::constants::INDICATOR_ID;
use crate::dom;
use hero_core::constants::INDICATOR_TRANSITION;
use hero_core::translate_y_vh;
use web_sys as web;

#[inline]
pub fn install_transition(document: &web::Document) {
    if let Some(el) = dom::html_element(document, INDICATOR_ID) {
        _ = el.style().set_property("transition", INDICATOR_TRANSITION);
    }
}

#[inline]
pub fn set_offset(document: &web::Document, offset_vh: f64) {
    if let Some(el) = dom::html_element(document, INDICATOR_ID) {
        _ = el.style().set_property("transform", &translate_y_vh(offset_vh));
    }
}

#[inline]
pub fn scroll_into_view(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let options = web::ScrollIntoViewOptions::new();
        options.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
