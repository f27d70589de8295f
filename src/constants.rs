// DOM ids the hero section looks up.

pub const CANVAS_ID: &str = "canvas"; // full-viewport decorative canvas
pub const CONTAINER_ID: &str = "hero-intro"; // reference container for scroll progress
pub const INDICATOR_ID: &str = "scroll-indicator"; // floating arrow below the intro
pub const SCROLL_TARGET_ID: &str = "intro"; // section the indicator scrolls to
