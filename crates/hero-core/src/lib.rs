pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod hero;
pub mod host;
pub mod parallax;
pub mod scheduler;
pub mod scroll;
pub mod surface;
pub mod trails;

pub use canvas::CanvasRenderer;
pub use config::{AttractorParams, HeroConfig, HueParams, TrailParams};
pub use error::{ConfigError, HostError};
pub use hero::HeroSection;
pub use host::{HeroHost, HostEvent, Viewport};
pub use parallax::{scroll_progress, translate_y_vh, ParallaxTranslator};
pub use scheduler::{AnimationLoop, FrameHost, FrameId};
pub use scroll::{ScrollPosition, ScrollReader, ScrollTracker, Subscription};
pub use surface::{Blend, PathSeg, StrokeStyle, Surface};
pub use trails::TrailField;
