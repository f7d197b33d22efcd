use serde::{Deserialize, Serialize};

use crate::core::LayoutMetrics;
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::ZoomBounds;

/// Default on-screen width of one second at zoom 1.0.
pub const DEFAULT_BASE_PX_PER_SEC: f64 = 50.0;
/// Default nominal timeline length in seconds.
pub const DEFAULT_NOMINAL_DURATION_SECS: f64 = 2.5;
/// Default zoom factor.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load widget
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub layout: LayoutMetrics,
    #[serde(default = "default_base_px_per_sec")]
    pub base_px_per_sec: f64,
    #[serde(default = "default_nominal_duration")]
    pub nominal_duration: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_zoom_bounds")]
    pub zoom_bounds: ZoomBounds,
}

impl TimelineEngineConfig {
    /// Creates a minimal config at default rate, duration, and zoom.
    #[must_use]
    pub fn new(layout: LayoutMetrics) -> Self {
        Self {
            layout,
            base_px_per_sec: default_base_px_per_sec(),
            nominal_duration: default_nominal_duration(),
            zoom: default_zoom(),
            zoom_bounds: default_zoom_bounds(),
        }
    }

    /// Sets the seconds-to-pixels rate at zoom 1.0.
    #[must_use]
    pub fn with_base_px_per_sec(mut self, px_per_sec: f64) -> Self {
        self.base_px_per_sec = px_per_sec;
        self
    }

    /// Sets the nominal timeline length in seconds.
    #[must_use]
    pub fn with_nominal_duration(mut self, seconds: f64) -> Self {
        self.nominal_duration = seconds;
        self
    }

    /// Sets the initial zoom factor.
    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets the slider contract for zoom control surfaces.
    #[must_use]
    pub fn with_zoom_bounds(mut self, bounds: ZoomBounds) -> Self {
        self.zoom_bounds = bounds;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_base_px_per_sec() -> f64 {
    DEFAULT_BASE_PX_PER_SEC
}

fn default_nominal_duration() -> f64 {
    DEFAULT_NOMINAL_DURATION_SECS
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

fn default_zoom_bounds() -> ZoomBounds {
    ZoomBounds::default()
}
