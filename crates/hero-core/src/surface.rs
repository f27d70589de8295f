use crate::host::Viewport;
use glam::Vec2;

/// Compositing mode for strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    SourceOver,
    Lighter,
}

impl Blend {
    pub fn as_css(self) -> &'static str {
        match self {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
    pub width: f32,
}

impl StrokeStyle {
    pub fn to_css(&self) -> String {
        format!(
            "hsla({},{}%,{}%,{})",
            self.hue.round(),
            self.saturation,
            self.lightness,
            self.alpha
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSeg {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
}

/// 2D drawing target. Coordinates are CSS pixels; implementations scale for
/// the device pixel ratio.
pub trait Surface {
    fn size(&self) -> Viewport;
    fn resize(&mut self, viewport: Viewport);
    /// Clear the whole surface to transparent.
    fn clear(&mut self);
    fn set_blend(&mut self, blend: Blend);
    fn set_stroke(&mut self, style: &StrokeStyle);
    fn stroke_path(&mut self, path: &[PathSeg]);
}
