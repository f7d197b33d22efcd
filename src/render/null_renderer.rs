use crate::core::Viewport;
use crate::error::TimelineResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It records the facts of each frame so tests can assert on surface sizing
/// and paint cadence without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_surface: Option<Viewport>,
    pub last_series_count: usize,
    pub last_sec_width_px: f64,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        self.frames_rendered += 1;
        self.last_surface = Some(frame.surface);
        self.last_series_count = frame.series.len();
        self.last_sec_width_px = frame.sec_width_px;
        Ok(())
    }
}
