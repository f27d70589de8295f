//! Tuning for the hero section.
//!
//! Every field defaults to the matching value in [`crate::constants`]. Hosts
//! may override individual fields (the web host reads `data-*` attributes) and
//! should call [`HeroConfig::validate`] before mounting.

use crate::constants::*;
use crate::error::ConfigError;

/// Hue oscillator: `hue = offset + sin(phase) * amplitude`, phase advancing by
/// `frequency` each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HueParams {
    pub offset: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Default for HueParams {
    fn default() -> Self {
        Self {
            offset: HUE_OFFSET,
            amplitude: HUE_AMPLITUDE,
            frequency: HUE_FREQUENCY,
        }
    }
}

/// Path the trail heads chase. Radii are fractions of the viewport size.
#[derive(Clone, Debug, PartialEq)]
pub struct AttractorParams {
    pub speed: f32,
    pub radius_x: f32,
    pub radius_y: f32,
    pub ratio: f32,
}

impl Default for AttractorParams {
    fn default() -> Self {
        Self {
            speed: ATTRACTOR_SPEED,
            radius_x: ATTRACTOR_RADIUS_X,
            radius_y: ATTRACTOR_RADIUS_Y,
            ratio: ATTRACTOR_RATIO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailParams {
    pub trails: usize,
    pub nodes_per_trail: usize,
    pub friction: f32,
    pub friction_jitter: f32,
    pub dampening: f32,
    pub tension: f32,
    pub spring_base: f32,
    pub spring_step: f32,
    pub spring_jitter: f32,
    pub stroke_alpha: f32,
    pub stroke_width: f32,
    pub fade_in_frames: u32,
    pub hue: HueParams,
    pub attractor: AttractorParams,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            trails: TRAIL_COUNT,
            nodes_per_trail: NODES_PER_TRAIL,
            friction: FRICTION,
            friction_jitter: FRICTION_JITTER,
            dampening: DAMPENING,
            tension: TENSION,
            spring_base: SPRING_BASE,
            spring_step: SPRING_STEP,
            spring_jitter: SPRING_JITTER,
            stroke_alpha: STROKE_ALPHA,
            stroke_width: STROKE_WIDTH,
            fade_in_frames: FADE_IN_FRAMES,
            hue: HueParams::default(),
            attractor: AttractorParams::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroConfig {
    pub trail: TrailParams,
    /// Indicator travel in vh at full progress (`K`).
    pub max_offset_vh: f64,
    pub pause_on_blur: bool,
    /// Fixed seed for the trail jitter; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            trail: TrailParams::default(),
            max_offset_vh: INDICATOR_MAX_OFFSET_VH,
            pause_on_blur: PAUSE_ON_BLUR,
            seed: None,
        }
    }
}

impl HeroConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.trail;
        if t.nodes_per_trail < 2 {
            return Err(ConfigError::TooFewNodes(t.nodes_per_trail));
        }
        at_most("trails", t.trails, MAX_TRAILS)?;
        at_most("nodes_per_trail", t.nodes_per_trail, MAX_NODES_PER_TRAIL)?;
        unit_range("friction", t.friction)?;
        unit_range("tension", t.tension)?;
        unit_range("stroke_alpha", t.stroke_alpha)?;
        if !self.max_offset_vh.is_finite() || self.max_offset_vh < 0.0 {
            return Err(ConfigError::BadOffset(self.max_offset_vh));
        }
        Ok(())
    }
}

#[inline]
fn unit_range(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

#[inline]
fn at_most(name: &'static str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value <= max {
        Ok(())
    } else {
        Err(ConfigError::TooLarge { name, value, max })
    }
}
