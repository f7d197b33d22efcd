use serde::{Deserialize, Serialize};

/// Contract for a host zoom slider (`min`/`max`/`step` of a range input).
///
/// Bounds constrain control surfaces only. Engine zoom set directly through
/// the API is stored as given, so a host can still drive the scale outside
/// the slider's reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
    /// Increment between adjacent slider stops.
    pub step: f64,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 3.0,
            step: 0.1,
        }
    }
}

impl ZoomBounds {
    /// Clamps a zoom factor into `[min, max]`.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Mirror of a host zoom slider.
///
/// Tracks the value the slider would display. Assigning out-of-range zoom
/// clamps here, like a range input does, while the engine keeps the raw
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomControl {
    value: f64,
    bounds: ZoomBounds,
}

impl ZoomControl {
    #[must_use]
    pub fn new(zoom: f64, bounds: ZoomBounds) -> Self {
        Self {
            value: bounds.clamp(zoom),
            bounds,
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn bounds(self) -> ZoomBounds {
        self.bounds
    }

    pub(crate) fn sync(&mut self, zoom: f64) {
        self.value = self.bounds.clamp(zoom);
    }
}

/// Text readouts shown beside the slider: zoom factor and the end of the
/// visible range in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsReadout {
    pub zoom_text: String,
    pub visible_end_text: String,
}

impl ControlsReadout {
    /// Formats zoom to one decimal and the visible end to two, matching the
    /// widget chrome.
    #[must_use]
    pub fn format(zoom: f64, visible_end_secs: f64) -> Self {
        Self {
            zoom_text: format!("{zoom:.1}"),
            visible_end_text: format!("{visible_end_secs:.2}"),
        }
    }
}
