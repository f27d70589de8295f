use thiserror::Error;

/// Failures reported by a host environment.
///
/// None of these reach the page: the hero logs them and drops the affected
/// effect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("2d drawing context unavailable")]
    NoSurface,
    #[error("host call failed: {0}")]
    Js(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("trail needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),
    #[error("{name} must be at most {max}, got {value}")]
    TooLarge {
        name: &'static str,
        value: usize,
        max: usize,
    },
    #[error("{name} must be in (0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("max indicator offset must be finite and non-negative, got {0}")]
    BadOffset(f64),
}
