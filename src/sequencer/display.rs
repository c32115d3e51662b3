//! Minimum-display configuration for the draw sequence

use std::time::Duration;

use crate::core::{DEFAULT_DURATION_MS, DRAWING_MESSAGE};

/// Display configuration built once at activation and immutable afterwards
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Minimum time the in-progress display stays visible
    pub duration: Duration,
    /// Caption shown next to the animation while the draw is in flight
    pub caption: &'static str,
}

impl DisplayConfig {
    /// Builds the display configuration from an optional raw duration
    /// override, applying the defaulting rules of [`resolve_duration`]
    pub fn from_override(raw: Option<&str>) -> Self {
        DisplayConfig {
            duration: Duration::from_millis(resolve_duration(raw)),
            caption: DRAWING_MESSAGE,
        }
    }
}

/// Resolves the minimum display duration in milliseconds
///
/// Missing, unparseable, or non-positive overrides silently fall back to the
/// 3000ms default; this is a defaulting rule, not an error.
pub fn resolve_duration(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|&ms| ms > 0)
        .map(|ms| ms as u64)
        .unwrap_or(DEFAULT_DURATION_MS)
}
