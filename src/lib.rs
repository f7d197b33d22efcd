//! timeline-rs: headless engine for a zoomable timeline strip widget.
//!
//! This crate models the widget's state and math (scale, events, plot
//! matrices, layout/surface sync) behind a renderer trait, so hosts own the
//! actual drawing surface and DOM-ish concerns while the engine stays
//! deterministic and testable.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
