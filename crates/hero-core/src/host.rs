use crate::error::HostError;
use crate::scheduler::FrameHost;
use crate::surface::Surface;
use glam::Vec2;

/// Host events the hero listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Scroll,
    Resize,
    OrientationChange,
    Focus,
    Blur,
    IndicatorClick,
}

impl HostEvent {
    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            HostEvent::Scroll => "scroll",
            HostEvent::Resize => "resize",
            HostEvent::OrientationChange => "orientationchange",
            HostEvent::Focus => "focus",
            HostEvent::Blur => "blur",
            HostEvent::IndicatorClick => "click",
        }
    }
}

/// Visible viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Device pixel ratio, 1 when the reported one is unusable.
    #[inline]
    pub fn effective_pixel_ratio(&self) -> f64 {
        if self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0 {
            self.pixel_ratio
        } else {
            1.0
        }
    }

    /// Backing-store size in device pixels, never below 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = self.effective_pixel_ratio();
        let w = (self.width.max(0.0) * dpr) as u32;
        let h = (self.height.max(0.0) * dpr) as u32;
        (w.max(1), h.max(1))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Everything the hero needs from the page it is mounted in.
///
/// Listeners are RAII: dropping a `Listener` must deregister it.
pub trait HeroHost: 'static {
    type Listener;
    type Frames: FrameHost;
    type Surface: Surface;

    fn viewport(&self) -> Viewport;
    fn scroll_y(&self) -> f64;
    /// Height of the reference container, `None` when it is not in the page.
    fn container_height(&self) -> Option<f64>;

    fn listen(
        &self,
        event: HostEvent,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self::Listener, HostError>;

    fn acquire_surface(&self) -> Result<Self::Surface, HostError>;
    /// Frame source that calls `on_frame` for every delivered frame.
    fn frames(&self, on_frame: Box<dyn FnMut()>) -> Self::Frames;

    /// Called once at mount, before any offset is applied.
    fn prepare_indicator(&self) {}
    fn set_indicator_offset(&self, offset_vh: f64);
    fn scroll_target_into_view(&self);
}
