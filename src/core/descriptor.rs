use serde::{Deserialize, Serialize};

use crate::core::coerce::attr_number;
use crate::core::node::{ElementNode, HostNode};

/// Attribute carrying an event's position in seconds.
pub const DATA_POSITION_ATTR: &str = "data-position";
/// Attribute carrying an event's duration in seconds.
pub const DATA_DURATION_ATTR: &str = "data-duration";
/// Attribute carrying an event's recurrence interval in seconds.
pub const DATA_INTERVAL_ATTR: &str = "data-interval";

/// Numeric placement metadata read off one element snapshot.
///
/// Absent or empty attributes default to zero; present but malformed
/// values coerce to `NaN` and flow on unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub position: f64,
    pub duration: f64,
    pub interval: f64,
}

impl EventDescriptor {
    #[must_use]
    pub fn from_element(element: &ElementNode) -> Self {
        Self {
            position: attr_number(element.attribute(DATA_POSITION_ATTR)),
            duration: attr_number(element.attribute(DATA_DURATION_ATTR)),
            interval: attr_number(element.attribute(DATA_INTERVAL_ATTR)),
        }
    }
}

/// Collects, in document order, every element in the snapshot carrying a
/// `data-position` attribute, descending into matching elements as well.
#[must_use]
pub fn positioned_elements(children: &[HostNode]) -> Vec<&ElementNode> {
    let mut found = Vec::new();
    for node in children {
        collect_positioned(node, &mut found);
    }
    found
}

fn collect_positioned<'a>(node: &'a HostNode, found: &mut Vec<&'a ElementNode>) {
    let HostNode::Element(element) = node else {
        return;
    };
    if element.has_attribute(DATA_POSITION_ATTR) {
        found.push(element);
    }
    for child in &element.children {
        collect_positioned(child, found);
    }
}
