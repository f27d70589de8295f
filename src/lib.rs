#![cfg(target_arch = "wasm32")]
use constants::{CANVAS_ID, INDICATOR_ID};
use hero_core::{HeroConfig, HeroSection};
use host::WebHost;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod indicator;
mod render;

thread_local! {
    // One hero per page; replaced on remount.
    static HERO: RefCell<Option<HeroSection<WebHost>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (_, document) = dom::window_document()?;
    if document.get_element_by_id(CANVAS_ID).is_none()
        && document.get_element_by_id(INDICATOR_ID).is_none()
    {
        log::info!("no hero section on this page");
        return Ok(());
    }
    mount_hero()
}

fn mount_hero() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;
    let config = config::apply_overrides(HeroConfig::default(), |key| {
        dom::dataset_value(&document, CANVAS_ID, key)
    });
    let host = Rc::new(WebHost::new(window, document));

    HERO.with(|slot| {
        let mut slot = slot.borrow_mut();
        // Tear the old instance down before the new one registers anything.
        if let Some(mut previous) = slot.take() {
            previous.unmount();
        }
        let mut hero = HeroSection::new(host, config);
        hero.mount();
        *slot = Some(hero);
    });
    Ok(())
}

/// Mount (or remount) the hero on the current page. Call after client-side
/// navigation brings the hero markup back.
#[wasm_bindgen]
pub fn mount() {
    if let Err(e) = mount_hero() {
        log::warn!("hero mount skipped: {:?}", e);
    }
}

/// Stop the animation and remove every listener the hero registered.
#[wasm_bindgen]
pub fn unmount() {
    HERO.with(|slot| {
        if let Some(mut hero) = slot.borrow_mut().take() {
            hero.unmount();
        }
    });
}

/// Whether the decorative canvas is currently animating.
#[wasm_bindgen(js_name = isAnimating)]
pub fn is_animating() -> bool {
    HERO.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|h| h.is_animating())
            .unwrap_or(false)
    })
}
