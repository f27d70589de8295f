/// Normalised progress through the reference container, in [0, 1].
///
/// An unmeasured (zero height) container or a NaN reading yields 0. Infinite
/// readings clamp like any other.
#[inline]
pub fn scroll_progress(scroll_y: f64, container_height: f64) -> f64 {
    if scroll_y.is_nan() || !container_height.is_finite() || container_height <= 0.0 {
        return 0.0;
    }
    (scroll_y / container_height).clamp(0.0, 1.0)
}

/// Maps scroll position to the indicator offset, `progress * K` vh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTranslator {
    max_offset_vh: f64,
}

impl ParallaxTranslator {
    pub fn new(max_offset_vh: f64) -> Self {
        let max_offset_vh = if max_offset_vh.is_finite() {
            max_offset_vh.max(0.0)
        } else {
            0.0
        };
        Self { max_offset_vh }
    }

    #[inline]
    pub fn max_offset_vh(&self) -> f64 {
        self.max_offset_vh
    }

    #[inline]
    pub fn offset_vh(&self, scroll_y: f64, container_height: Option<f64>) -> f64 {
        let progress = container_height
            .map(|h| scroll_progress(scroll_y, h))
            .unwrap_or(0.0);
        progress * self.max_offset_vh
    }
}

/// CSS transform for an indicator offset.
#[inline]
pub fn translate_y_vh(offset_vh: f64) -> String {
    format!("translateY({offset_vh}vh)")
}
