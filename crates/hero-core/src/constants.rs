// Default tuning for the hero section. `HeroConfig::default()` is built from these.

// Parallax
pub const INDICATOR_MAX_OFFSET_VH: f64 = 10.0; // indicator travel at full scroll progress
pub const INDICATOR_TRANSITION: &str = "transform 0.3s ease-out";

// Trail field shape
pub const TRAIL_COUNT: usize = 20;
pub const NODES_PER_TRAIL: usize = 50;
pub const MAX_TRAILS: usize = 200; // upper bound accepted from page markup
pub const MAX_NODES_PER_TRAIL: usize = 500;

// Spring chain dynamics
pub const FRICTION: f32 = 0.5;
pub const FRICTION_JITTER: f32 = 0.01; // total spread, centred on FRICTION
pub const DAMPENING: f32 = 0.25; // share of the previous node's velocity inherited each frame
pub const TENSION: f32 = 0.98; // spring falloff along the chain
pub const SPRING_BASE: f32 = 0.45;
pub const SPRING_STEP: f32 = 0.025; // spread of base spring across all trails
pub const SPRING_JITTER: f32 = 0.1; // total spread, centred on the per-trail spring

// Stroke look
pub const STROKE_ALPHA: f32 = 0.2;
pub const STROKE_WIDTH: f32 = 1.0;
pub const STROKE_SATURATION: f32 = 50.0;
pub const STROKE_LIGHTNESS: f32 = 50.0;
pub const FADE_IN_FRAMES: u32 = 90; // frames for a trail to reach full opacity

// Hue oscillator (degrees)
pub const HUE_OFFSET: f32 = 285.0;
pub const HUE_AMPLITUDE: f32 = 85.0;
pub const HUE_FREQUENCY: f32 = 0.0015; // radians per frame

// Autonomous attractor, a Lissajous path around the viewport centre
pub const ATTRACTOR_SPEED: f32 = 0.012; // radians per frame
pub const ATTRACTOR_RADIUS_X: f32 = 0.35; // fraction of viewport width
pub const ATTRACTOR_RADIUS_Y: f32 = 0.25; // fraction of viewport height
pub const ATTRACTOR_RATIO: f32 = 1.7; // y frequency relative to x

// Lifecycle
pub const PAUSE_ON_BLUR: bool = true;
