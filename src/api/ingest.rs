use tracing::trace;

use crate::core::{
    ElementNode, EventDescriptor, EventLabel, EventSpec, HostNode, positioned_elements,
};
use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Ingests one host child the way a DOM `appendChild` override would.
    ///
    /// Only element nodes carry placement attributes; anything else is
    /// rejected before any state changes.
    pub fn append_node(&mut self, node: &HostNode) -> TimelineResult<()> {
        let Some(element) = node.as_element() else {
            return Err(TimelineError::InvalidNodeType {
                found: node.kind_name(),
            });
        };
        self.place_element(element);
        Ok(())
    }

    /// Adopts a connected host's light tree: every descendant carrying a
    /// position attribute is ingested in document order, then an initial
    /// paint runs.
    pub fn connect(&mut self, children: &[HostNode]) -> TimelineResult<()> {
        for element in positioned_elements(children) {
            self.place_element(element);
        }
        self.render()
    }

    fn place_element(&mut self, element: &ElementNode) {
        let descriptor = EventDescriptor::from_element(element);
        trace!(
            position = descriptor.position,
            duration = descriptor.duration,
            interval = descriptor.interval,
            "ingest positioned element"
        );
        self.add_event(
            EventSpec::at(descriptor.position, EventLabel::Fragment(element.clone()))
                .with_duration(descriptor.duration)
                .with_interval(descriptor.interval),
        );
    }
}
