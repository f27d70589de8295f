use crate::dom::{self, js_err};
use hero_core::{Blend, HostError, PathSeg, StrokeStyle, Surface, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context. Drawing coordinates are CSS
/// pixels; the context transform scales them to the backing store.
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size: Viewport,
}

impl Canvas2dSurface {
    pub fn acquire(canvas: web::HtmlCanvasElement) -> Result<Self, HostError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(HostError::NoSurface)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| HostError::NoSurface)?;
        Ok(Self {
            canvas,
            ctx,
            size: Viewport::new(0.0, 0.0),
        })
    }
}

impl Surface for Canvas2dSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) {
        dom::sync_canvas_backing_size(&self.canvas, &viewport);
        // Resizing the backing store resets context state.
        let dpr = viewport.effective_pixel_ratio();
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.size = viewport;
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.width, self.size.height);
    }

    fn set_blend(&mut self, blend: Blend) {
        _ = self.ctx.set_global_composite_operation(blend.as_css());
    }

    fn set_stroke(&mut self, style: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.to_css());
        self.ctx.set_line_width(style.width as f64);
    }

    fn stroke_path(&mut self, path: &[PathSeg]) {
        if path.is_empty() {
            return;
        }
        self.ctx.begin_path();
        for seg in path {
            match *seg {
                PathSeg::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathSeg::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
            }
        }
        self.ctx.stroke();
        self.ctx.close_path();
    }
}
