use crate::config::TrailParams;
use crate::error::HostError;
use crate::host::Viewport;
use crate::scheduler::{AnimationLoop, FrameHost};
use crate::surface::Surface;
use crate::trails::TrailField;

/// Full-viewport decorative animation: a [`TrailField`] drawn onto a
/// [`Surface`] once per delivered frame.
pub struct CanvasRenderer<S: Surface, F: FrameHost> {
    surface: S,
    field: TrailField,
    frames: AnimationLoop<F>,
}

impl<S: Surface, F: FrameHost> CanvasRenderer<S, F> {
    pub fn new(
        mut surface: S,
        frames: F,
        params: &TrailParams,
        viewport: Viewport,
        seed: u64,
    ) -> Self {
        surface.resize(viewport);
        Self {
            surface,
            field: TrailField::new(params, viewport, seed),
            frames: AnimationLoop::new(frames),
        }
    }

    pub fn start(&mut self) -> Result<(), HostError> {
        self.frames.start()?;
        log::debug!("[canvas] animation started");
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.frames.is_running() {
            log::debug!(
                "[canvas] animation stopped after {} frames",
                self.frames.frame_count()
            );
        }
        self.frames.stop();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.surface.size() != viewport {
            log::debug!(
                "[canvas] resize {}x{} @{}",
                viewport.width,
                viewport.height,
                viewport.pixel_ratio
            );
            self.surface.resize(viewport);
        }
        self.field.set_viewport(viewport);
    }

    /// Frame callback body. Returns whether a frame was drawn.
    pub fn on_frame(&mut self, viewport: Viewport) -> bool {
        if !self.frames.tick() {
            return false;
        }
        self.resize(viewport);
        self.field.step();
        self.field.draw(&mut self.surface);
        true
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn frames(&self) -> &AnimationLoop<F> {
        &self.frames
    }
}
