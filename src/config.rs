// Optional tuning overrides read from the canvas element's `data-*`
// attributes. Kept free of web-sys so it can be tested on the host.

use hero_core::HeroConfig;
use std::str::FromStr;

// Dataset keys (camelCase of the attribute name).
pub const KEY_TRAILS: &str = "trails"; // data-trails
pub const KEY_NODES: &str = "nodes"; // data-nodes
pub const KEY_SEED: &str = "seed"; // data-seed
pub const KEY_MAX_OFFSET: &str = "maxOffset"; // data-max-offset
pub const KEY_PAUSE_ON_BLUR: &str = "pauseOnBlur"; // data-pause-on-blur

/// Apply every override `lookup` knows about. Unparseable values are logged
/// and skipped; range checks happen when the hero is built.
pub fn apply_overrides(
    mut config: HeroConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> HeroConfig {
    if let Some(v) = parse_value(&lookup, KEY_TRAILS) {
        config.trail.trails = v;
    }
    if let Some(v) = parse_value(&lookup, KEY_NODES) {
        config.trail.nodes_per_trail = v;
    }
    if let Some(v) = parse_value(&lookup, KEY_SEED) {
        config.seed = Some(v);
    }
    if let Some(v) = parse_value(&lookup, KEY_MAX_OFFSET) {
        config.max_offset_vh = v;
    }
    if let Some(v) = parse_flag(&lookup, KEY_PAUSE_ON_BLUR) {
        config.pause_on_blur = v;
    }
    config
}

fn parse_value<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {key}={raw:?}");
            None
        }
    }
}

/// A bare attribute (`data-pause-on-blur`) counts as true.
fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    let raw = lookup(key)?;
    match raw.trim() {
        "" | "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => {
            log::warn!("[config] ignoring {key}={raw:?}");
            None
        }
    }
}
