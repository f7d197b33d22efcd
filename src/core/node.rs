use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Snapshot of one host visual node.
///
/// The engine never observes a live node tree. The host hands it snapshots
/// of the nodes it wants placed; fragment labels keep a deep clone of the
/// snapshot as their visual content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostNode {
    Element(ElementNode),
    Text(String),
}

impl HostNode {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Short node-kind name used in error reports.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Element(_) => "element",
            Self::Text(_) => "text",
        }
    }
}

impl From<ElementNode> for HostNode {
    fn from(element: ElementNode) -> Self {
        Self::Element(element)
    }
}

/// Element snapshot: tag, attributes, optional text content, children.
///
/// Attribute insertion order is preserved so snapshots serialize
/// deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<HostNode>,
}

impl ElementNode {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<HostNode>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}
