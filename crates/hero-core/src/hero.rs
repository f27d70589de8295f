//! Hero section lifecycle.
//!
//! `mount` wires the scroll tracker, the parallax indicator and the canvas
//! renderer into the host. `unmount` (or drop) cancels the pending frame and
//! releases every listener. Failures only disable the affected effect.

use crate::canvas::CanvasRenderer;
use crate::config::HeroConfig;
use crate::host::{HeroHost, HostEvent};
use crate::parallax::ParallaxTranslator;
use crate::scroll::{ScrollReader, ScrollTracker, Subscription};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Renderer<H> = CanvasRenderer<<H as HeroHost>::Surface, <H as HeroHost>::Frames>;
type SharedRenderer<H> = Rc<RefCell<Renderer<H>>>;

struct Mounted<H: HeroHost> {
    renderer: Option<SharedRenderer<H>>,
    _listeners: Vec<H::Listener>,
    _indicator: Option<Subscription>,
    tracker: Option<ScrollTracker<H::Listener>>,
}

impl<H: HeroHost> Drop for Mounted<H> {
    fn drop(&mut self) {
        if let Some(renderer) = &self.renderer {
            match renderer.try_borrow_mut() {
                Ok(mut r) => r.stop(),
                Err(_) => log::warn!("[hero] renderer busy during teardown"),
            }
        }
        // Listeners, subscription and tracker drop after this, removing
        // their host registrations.
    }
}

pub struct HeroSection<H: HeroHost> {
    host: Rc<H>,
    config: HeroConfig,
    mounted: Option<Mounted<H>>,
}

impl<H: HeroHost> HeroSection<H> {
    pub fn new(host: Rc<H>, config: HeroConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[hero] invalid config ({e}); using defaults");
                HeroConfig::default()
            }
        };
        Self {
            host,
            config,
            mounted: None,
        }
    }

    /// Start listeners and animation. Mounting twice tears the previous
    /// instance down first.
    pub fn mount(&mut self) {
        if self.mounted.is_some() {
            log::debug!("[hero] already mounted; remounting");
            self.unmount();
        }

        let tracker = match ScrollTracker::attach(&self.host) {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("[hero] scroll tracking unavailable: {e}");
                None
            }
        };
        let indicator = tracker.as_ref().map(|t| self.wire_indicator(t.reader()));

        let mut listeners = Vec::new();
        let weak_host = Rc::downgrade(&self.host);
        self.listen_into(
            &mut listeners,
            HostEvent::IndicatorClick,
            Box::new(move || {
                if let Some(h) = weak_host.upgrade() {
                    h.scroll_target_into_view();
                }
            }),
        );

        let renderer = self.start_renderer(&mut listeners);
        log::debug!(
            "[hero] mounted: parallax={} canvas={} listeners={}",
            tracker.is_some(),
            renderer.is_some(),
            listeners.len() + usize::from(tracker.is_some())
        );
        self.mounted = Some(Mounted {
            renderer,
            _listeners: listeners,
            _indicator: indicator,
            tracker,
        });
    }

    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::debug!("[hero] unmounted");
        }
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Shared scroll value while mounted.
    pub fn scroll(&self) -> Option<ScrollReader> {
        self.mounted
            .as_ref()
            .and_then(|m| m.tracker.as_ref())
            .map(|t| t.reader())
    }

    pub fn is_animating(&self) -> bool {
        self.renderer()
            .map(|r| r.borrow().is_running())
            .unwrap_or(false)
    }

    /// Frames drawn by the current renderer.
    pub fn frame_count(&self) -> u64 {
        self.renderer()
            .map(|r| r.borrow().frames().frame_count())
            .unwrap_or(0)
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    fn renderer(&self) -> Option<&SharedRenderer<H>> {
        self.mounted.as_ref().and_then(|m| m.renderer.as_ref())
    }

    fn wire_indicator(&self, reader: ScrollReader) -> Subscription {
        let translator = ParallaxTranslator::new(self.config.max_offset_vh);
        self.host.prepare_indicator();
        self.host.set_indicator_offset(
            translator.offset_vh(reader.get(), self.host.container_height()),
        );
        let weak_host = Rc::downgrade(&self.host);
        reader.subscribe(move |scroll_y| {
            if let Some(h) = weak_host.upgrade() {
                h.set_indicator_offset(translator.offset_vh(scroll_y, h.container_height()));
            }
        })
    }

    fn start_renderer(&self, listeners: &mut Vec<H::Listener>) -> Option<SharedRenderer<H>> {
        let surface = match self.host.acquire_surface() {
            Ok(s) => s,
            Err(e) => {
                log::info!("[hero] decorative canvas disabled: {e}");
                return None;
            }
        };
        let viewport = self.host.viewport();
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let weak_host = Rc::downgrade(&self.host);

        let renderer: SharedRenderer<H> = Rc::new_cyclic(|weak: &Weak<RefCell<Renderer<H>>>| {
            let weak = weak.clone();
            let frame_host = weak_host.clone();
            let frames = self.host.frames(Box::new(move || {
                if let (Some(r), Some(h)) = (weak.upgrade(), frame_host.upgrade()) {
                    r.borrow_mut().on_frame(h.viewport());
                }
            }));
            RefCell::new(CanvasRenderer::new(
                surface,
                frames,
                &self.config.trail,
                viewport,
                seed,
            ))
        });

        for event in [HostEvent::Resize, HostEvent::OrientationChange] {
            let weak = Rc::downgrade(&renderer);
            let weak_host = weak_host.clone();
            self.listen_into(
                listeners,
                event,
                Box::new(move || {
                    if let (Some(r), Some(h)) = (weak.upgrade(), weak_host.upgrade()) {
                        r.borrow_mut().resize(h.viewport());
                    }
                }),
            );
        }

        if self.config.pause_on_blur {
            let weak = Rc::downgrade(&renderer);
            self.listen_into(
                listeners,
                HostEvent::Focus,
                Box::new(move || {
                    if let Some(r) = weak.upgrade() {
                        if let Err(e) = r.borrow_mut().start() {
                            log::warn!("[hero] could not resume animation: {e}");
                        }
                    }
                }),
            );
            let weak = Rc::downgrade(&renderer);
            self.listen_into(
                listeners,
                HostEvent::Blur,
                Box::new(move || {
                    if let Some(r) = weak.upgrade() {
                        r.borrow_mut().stop();
                    }
                }),
            );
        }

        if let Err(e) = renderer.borrow_mut().start() {
            log::warn!("[hero] animation did not start: {e}");
        }
        Some(renderer)
    }

    fn listen_into(
        &self,
        listeners: &mut Vec<H::Listener>,
        event: HostEvent,
        handler: Box<dyn FnMut()>,
    ) {
        match self.host.listen(event, handler) {
            Ok(l) => listeners.push(l),
            Err(e) => log::debug!("[hero] no {} listener: {e}", event.name()),
        }
    }
}
