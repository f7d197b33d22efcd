use indexmap::IndexMap;

use crate::core::{LayoutMetrics, PlacedEvent, PlotData, TimeScale, Viewport};
use crate::interaction::ZoomControl;

use super::TimelineEngineConfig;

/// Core timeline domain state behind the public facade.
///
/// Groups the mutable widget state (scale inputs, layout, surface, events,
/// plot series, slider mirror) so the facade stays a thin orchestration
/// layer.
pub(super) struct TimelineModel {
    pub(super) zoom: f64,
    pub(super) base_px_per_sec: f64,
    pub(super) nominal_duration: f64,
    pub(super) layout: LayoutMetrics,
    pub(super) surface: Viewport,
    pub(super) events: Vec<PlacedEvent>,
    pub(super) data: IndexMap<String, PlotData>,
    pub(super) zoom_control: ZoomControl,
}

impl TimelineModel {
    pub(super) fn new(config: TimelineEngineConfig) -> Self {
        Self {
            zoom: config.zoom,
            base_px_per_sec: config.base_px_per_sec,
            nominal_duration: config.nominal_duration,
            layout: config.layout,
            surface: config.layout.strip,
            events: Vec::new(),
            data: IndexMap::new(),
            zoom_control: ZoomControl::new(config.zoom, config.zoom_bounds),
        }
    }

    /// The live scale; derived, never stored, so zoom and rate changes take
    /// effect everywhere at once.
    pub(super) fn scale(&self) -> TimeScale {
        TimeScale::new(self.base_px_per_sec, self.zoom)
    }
}
