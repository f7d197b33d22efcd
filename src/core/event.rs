use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::node::ElementNode;
use crate::core::scale::{EventGeometry, TimeScale};

/// Visual variant of a placed event; a styling distinction only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// No duration: rendered as a marker.
    Point,
    /// Nonzero duration: rendered as a span.
    Ranged,
}

/// Visual content attached to a placed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventLabel {
    /// Plain text; the host materializes a fresh node around it.
    Text(String),
    /// A host node snapshot, deep-cloned at placement so later host
    /// mutations cannot reach placed events.
    Fragment(ElementNode),
}

impl From<&str> for EventLabel {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for EventLabel {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<ElementNode> for EventLabel {
    fn from(element: ElementNode) -> Self {
        Self::Fragment(element)
    }
}

/// Declarative request for one event or one recurring series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSpec {
    pub position: f64,
    pub label: EventLabel,
    pub duration: Option<f64>,
    pub interval: f64,
}

impl EventSpec {
    #[must_use]
    pub fn at(position: f64, label: impl Into<EventLabel>) -> Self {
        Self {
            position,
            label: label.into(),
            duration: None,
            interval: 0.0,
        }
    }

    /// Sets the event span in seconds. Zero and `NaN` still place a point
    /// event.
    #[must_use]
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Sets the recurrence interval in seconds; only strictly positive
    /// values expand into a series.
    #[must_use]
    pub fn with_interval(mut self, seconds: f64) -> Self {
        self.interval = seconds;
        self
    }
}

/// One event fixed on the timeline.
///
/// Records are immutable once placed. Geometry is re-derived from the live
/// scale on every use instead of being stored here, so a zoom or rate
/// change never has to touch the event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEvent {
    position: f64,
    duration: f64,
    label: EventLabel,
}

impl PlacedEvent {
    fn single(position: f64, label: EventLabel, duration: Option<f64>) -> Self {
        Self {
            position,
            duration: normalize_duration(duration),
            label,
        }
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Span in seconds; `0.0` for point events.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn label(&self) -> &EventLabel {
        &self.label
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        if self.duration == 0.0 {
            EventKind::Point
        } else {
            EventKind::Ranged
        }
    }

    /// Pixel geometry at the given scale, derived on demand.
    #[must_use]
    pub fn geometry(&self, scale: TimeScale) -> EventGeometry {
        scale.event_geometry(self.position, self.duration)
    }
}

/// Places one event, or expands an `EventSpec` into a recurring series.
///
/// Recurrence is a plain loop: starting at the requested position, one
/// event is emitted every `interval` seconds while the emission time stays
/// within `nominal_duration`. The bound is the timeline's nominal duration,
/// not the `EventSpec`'s own `duration` field; the two are distinct
/// quantities that happen to share a name. A start past the bound places
/// nothing at all.
#[must_use]
pub fn place_spec(spec: EventSpec, nominal_duration: f64) -> SmallVec<[PlacedEvent; 4]> {
    if spec.interval > 0.0 {
        let mut placed = SmallVec::new();
        let mut at = spec.position;
        while at <= nominal_duration {
            placed.push(PlacedEvent::single(at, spec.label.clone(), spec.duration));
            at += spec.interval;
        }
        return placed;
    }
    smallvec![PlacedEvent::single(spec.position, spec.label, spec.duration)]
}

/// Events whose position falls inside an inclusive window; a reversed
/// window is normalized. Results are ordered by position, then by original
/// placement order.
#[must_use]
pub fn events_in_window(events: &[PlacedEvent], start: f64, end: f64) -> Vec<&PlacedEvent> {
    let (min_t, max_t) = if start <= end { (start, end) } else { (end, start) };

    let mut hits: Vec<(usize, &PlacedEvent)> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.position >= min_t && event.position <= max_t)
        .collect();
    hits.sort_by(|a, b| {
        OrderedFloat(a.1.position)
            .cmp(&OrderedFloat(b.1.position))
            .then_with(|| a.0.cmp(&b.0))
    });
    hits.into_iter().map(|(_, event)| event).collect()
}

fn normalize_duration(duration: Option<f64>) -> f64 {
    match duration {
        Some(span) if span != 0.0 && !span.is_nan() => span,
        _ => 0.0,
    }
}
