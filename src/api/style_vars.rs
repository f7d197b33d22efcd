use serde::{Deserialize, Serialize};

use crate::core::PlacedEvent;
use crate::render::Renderer;

use super::TimelineEngine;

/// Custom-property values a host applies to the widget container.
///
/// Stylesheets derive all horizontal sizing from these two vars, so pushing
/// fresh values is all a host needs to do after a zoom or rate change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineStyleVars {
    pub sec_width_px: f64,
    pub content_length_secs: f64,
}

impl TimelineStyleVars {
    /// Renders the vars as an inline `style` attribute payload.
    #[must_use]
    pub fn to_css_declarations(&self) -> String {
        format!(
            "--tl-sec-width: {}px; --tl-content-length: {}",
            self.sec_width_px, self.content_length_secs
        )
    }
}

/// Custom-property values a host applies to one placed event node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventStyleVars {
    pub position_secs: f64,
    pub duration_secs: f64,
}

impl EventStyleVars {
    #[must_use]
    pub fn of(event: &PlacedEvent) -> Self {
        Self {
            position_secs: event.position(),
            duration_secs: event.duration(),
        }
    }

    #[must_use]
    pub fn to_css_declarations(&self) -> String {
        format!(
            "--tl-event-position: {}; --tl-event-duration: {}",
            self.position_secs, self.duration_secs
        )
    }
}

impl<R: Renderer> TimelineEngine<R> {
    /// Container style vars at the current scale.
    #[must_use]
    pub fn style_vars(&self) -> TimelineStyleVars {
        TimelineStyleVars {
            sec_width_px: self.scale().pixels_per_second(),
            content_length_secs: self.nominal_duration(),
        }
    }
}
