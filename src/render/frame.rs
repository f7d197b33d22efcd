use serde::{Deserialize, Serialize};

use crate::core::{PlotData, Viewport};

/// Per-series facts a backend needs to lay out one plot strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub key: String,
    pub row_count: usize,
    pub duration_secs: f64,
}

impl SeriesSummary {
    #[must_use]
    pub fn of(key: &str, data: &PlotData) -> Self {
        Self {
            key: key.to_owned(),
            row_count: data.row_count(),
            duration_secs: data.duration(),
        }
    }
}

/// Backend-agnostic scene for one strip draw pass.
///
/// The surface is sized from the latest layout before the frame is built,
/// never the other way around. A zero-area surface is a legal frame; hidden
/// or collapsed hosts still paint.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: Viewport,
    /// On-screen width of one second, in pixels.
    pub sec_width_px: f64,
    /// Nominal timeline length in seconds; drives total content width.
    pub content_length_secs: f64,
    pub series: Vec<SeriesSummary>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: Viewport, sec_width_px: f64, content_length_secs: f64) -> Self {
        Self {
            surface,
            sec_width_px,
            content_length_secs,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesSummary) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
