mod frame;
mod null_renderer;

pub use frame::{RenderFrame, SeriesSummary};
pub use null_renderer::NullRenderer;

use crate::error::TimelineResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` whose surface already
/// matches the latest layout, so drawing code never reasons about resize.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;
}
