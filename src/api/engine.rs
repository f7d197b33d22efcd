use tracing::{debug, trace};

use crate::core::{
    EventGeometry, EventSpec, LayoutMetrics, PlacedEvent, PlotData, TimeScale, Viewport,
    coerce_number, events_in_window, place_spec,
};
use crate::error::TimelineResult;
use crate::interaction::{ControlsReadout, ZoomControl};
use crate::render::{RenderFrame, Renderer, SeriesSummary};

use super::TimelineEngineConfig;
use super::model::TimelineModel;
use super::validation::validate_zoom_bounds;

/// Host attribute naming the nominal timeline length in seconds.
pub const ATTR_DURATION: &str = "duration";
/// Host attribute naming the seconds-to-pixels rate at zoom 1.0.
pub const ATTR_PX_PER_SEC: &str = "pxPerSec";
/// Reserved host attribute; observed but not wired to any state yet.
pub const ATTR_POSITION: &str = "position";

/// Attributes a host element should observe and forward to
/// [`TimelineEngine::apply_attribute`].
pub const OBSERVED_ATTRIBUTES: [&str; 3] = [ATTR_DURATION, ATTR_PX_PER_SEC, ATTR_POSITION];

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` coordinates the time scale, placed events, plot series,
/// layout/surface synchronization, and renderer calls.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) model: TimelineModel,
}

impl<R: Renderer> TimelineEngine<R> {
    pub fn new(renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        validate_zoom_bounds(config.zoom_bounds)?;
        Ok(Self {
            renderer,
            model: TimelineModel::new(config),
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.model.zoom
    }

    #[must_use]
    pub fn base_px_per_sec(&self) -> f64 {
        self.model.base_px_per_sec
    }

    #[must_use]
    pub fn nominal_duration(&self) -> f64 {
        self.model.nominal_duration
    }

    #[must_use]
    pub fn scale(&self) -> TimeScale {
        self.model.scale()
    }

    /// Seconds interval on screen right now: always starts at zero and ends
    /// where the container's right edge falls at the current scale.
    #[must_use]
    pub fn visible_range(&self) -> (f64, f64) {
        self.model
            .scale()
            .visible_range(self.model.layout.container_width_px)
    }

    #[must_use]
    pub fn layout(&self) -> LayoutMetrics {
        self.model.layout
    }

    /// Size of the backing surface as of the last paint.
    #[must_use]
    pub fn surface(&self) -> Viewport {
        self.model.surface
    }

    #[must_use]
    pub fn events(&self) -> &[PlacedEvent] {
        &self.model.events
    }

    #[must_use]
    pub fn plot_data(&self, key: &str) -> Option<&PlotData> {
        self.model.data.get(key)
    }

    /// Series keys in insertion order.
    pub fn data_keys(&self) -> impl Iterator<Item = &str> {
        self.model.data.keys().map(String::as_str)
    }

    #[must_use]
    pub fn zoom_control(&self) -> ZoomControl {
        self.model.zoom_control
    }

    /// Chrome text for the current state: zoom factor and visible end.
    #[must_use]
    pub fn controls_readout(&self) -> ControlsReadout {
        ControlsReadout::format(self.model.zoom, self.visible_range().1)
    }

    /// Sets the zoom factor and repaints.
    ///
    /// The value is stored as given; only the slider mirror clamps. `NaN`
    /// flows into the scale and poisons derived geometry until replaced.
    pub fn set_zoom(&mut self, zoom: f64) -> TimelineResult<()> {
        self.model.zoom = zoom;
        self.model.zoom_control.sync(zoom);
        trace!(zoom, "set zoom");
        self.sync_surface_and_render()
    }

    /// Applies raw slider input: coerces the text, sets zoom, and returns
    /// the factor that was applied.
    pub fn apply_zoom_input(&mut self, raw: &str) -> TimelineResult<f64> {
        let zoom = coerce_number(raw);
        self.set_zoom(zoom)?;
        Ok(zoom)
    }

    /// Sets the nominal timeline length in seconds.
    ///
    /// Takes effect at the next paint; already placed events keep their
    /// positions.
    pub fn set_nominal_duration(&mut self, seconds: f64) {
        self.model.nominal_duration = seconds;
        trace!(seconds, "set nominal duration");
    }

    /// Sets the seconds-to-pixels rate at zoom 1.0. Takes effect at the
    /// next paint.
    pub fn set_base_px_per_sec(&mut self, px_per_sec: f64) {
        self.model.base_px_per_sec = px_per_sec;
        trace!(px_per_sec, "set base px per sec");
    }

    /// Reacts to a host attribute change.
    ///
    /// Values are coerced with the same silent rules as ingestion: empty
    /// becomes zero, unparsable text becomes `NaN`. Unobserved names are
    /// ignored. No paint is scheduled here.
    pub fn apply_attribute(&mut self, name: &str, value: &str) {
        match name {
            ATTR_DURATION => self.set_nominal_duration(coerce_number(value)),
            ATTR_PX_PER_SEC => self.set_base_px_per_sec(coerce_number(value)),
            ATTR_POSITION => {}
            _ => trace!(name, "ignoring unobserved attribute"),
        }
    }

    /// Places one event, or a whole series when the `EventSpec` carries a
    /// recurrence interval. Placed events become visible at the next paint.
    pub fn add_event(&mut self, spec: EventSpec) {
        let placed = place_spec(spec, self.model.nominal_duration);
        self.model.events.extend(placed);
        trace!(count = self.model.events.len(), "add event");
    }

    /// Pixel geometry of one event at the current scale.
    #[must_use]
    pub fn event_geometry(&self, event: &PlacedEvent) -> EventGeometry {
        event.geometry(self.model.scale())
    }

    /// Placed events whose position falls inside the given window.
    pub fn events_in_window(&self, start: f64, end: f64) -> Vec<&PlacedEvent> {
        events_in_window(&self.model.events, start, end)
    }

    /// Stores a plot series under a key, replacing any previous series with
    /// that key, and repaints.
    pub fn set_data(&mut self, key: &str, data: PlotData) -> TimelineResult<()> {
        debug!(key = %key, rows = data.row_count(), "set plot data");
        self.model.data.insert(key.to_owned(), data);
        self.sync_surface_and_render()
    }

    /// Adopts fresh layout measurements and repaints.
    pub fn sync_layout(&mut self, layout: LayoutMetrics) -> TimelineResult<()> {
        debug!(
            container_width_px = layout.container_width_px,
            "sync layout"
        );
        self.model.layout = layout;
        self.sync_surface_and_render()
    }

    /// Repaints from current state.
    pub fn render(&mut self) -> TimelineResult<()> {
        self.sync_surface_and_render()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Every paint path funnels through here: the surface is resized to the
    /// latest strip layout first, so the renderer never sees a stale
    /// surface.
    fn sync_surface_and_render(&mut self) -> TimelineResult<()> {
        self.model.surface = self.model.layout.strip;
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    fn build_frame(&self) -> RenderFrame {
        let scale = self.model.scale();
        let mut frame = RenderFrame::new(
            self.model.surface,
            scale.pixels_per_second(),
            self.model.nominal_duration,
        );
        for (key, data) in &self.model.data {
            debug!(key = %key, rows = data.row_count(), "plot series in frame");
            frame = frame.with_series(SeriesSummary::of(key, data));
        }
        frame
    }
}
