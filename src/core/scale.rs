use serde::{Deserialize, Serialize};

/// Pixel geometry for one placed event at the current scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventGeometry {
    pub left_px: f64,
    pub width_px: f64,
}

/// Seconds-to-pixels scale at the current zoom level.
///
/// The scale owns no state: it is rebuilt from the live zoom and base rate
/// on every use, so geometry can never observe a stale zoom. There are no
/// error paths; `NaN` inputs flow through every formula untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    base_px_per_sec: f64,
    zoom: f64,
}

impl TimeScale {
    #[must_use]
    pub fn new(base_px_per_sec: f64, zoom: f64) -> Self {
        Self {
            base_px_per_sec,
            zoom,
        }
    }

    /// Current horizontal scale factor: the base rate multiplied by zoom.
    #[must_use]
    pub fn pixels_per_second(self) -> f64 {
        self.base_px_per_sec * self.zoom
    }

    #[must_use]
    pub fn seconds_to_pixel(self, seconds: f64) -> f64 {
        seconds * self.pixels_per_second()
    }

    #[must_use]
    pub fn pixel_to_seconds(self, pixel: f64) -> f64 {
        pixel / self.pixels_per_second()
    }

    /// Seconds interval visible in a container of the given client width,
    /// anchored at zero.
    #[must_use]
    pub fn visible_range(self, container_width_px: f64) -> (f64, f64) {
        (0.0, container_width_px / self.pixels_per_second())
    }

    /// Geometry for an event at `position` seconds spanning `duration`
    /// seconds (zero for point events).
    #[must_use]
    pub fn event_geometry(self, position: f64, duration: f64) -> EventGeometry {
        EventGeometry {
            left_px: self.seconds_to_pixel(position),
            width_px: self.seconds_to_pixel(duration),
        }
    }
}
