use serde::{Deserialize, Serialize};

/// Backing size of the drawing surface, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Host-measured layout of the widget.
///
/// The scroll container's client width drives the visible range; the inner
/// strip's laid-out size drives the backing surface. Both are reported by
/// the host, never measured here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub container_width_px: f64,
    pub strip: Viewport,
}

impl LayoutMetrics {
    #[must_use]
    pub fn new(container_width_px: f64, strip: Viewport) -> Self {
        Self {
            container_width_px,
            strip,
        }
    }
}
