//! HTML Node representation
//!
//! Uses NodeId (u32) for compact node references. Nodes never leave the
//! arena: a removed node is only unlinked, so its id stays valid.

/// Compact node identifier (index into arena)
pub type NodeId = u32;

/// Type of HTML node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Element node
    Element,
    /// Text content
    Text,
    /// Comment
    Comment,
}

/// A node in the arena
#[derive(Debug, Clone)]
pub struct HtmlNode {
    /// Type of this node
    pub kind: NodeKind,
    /// Parent node (None for the document and for detached nodes)
    pub parent: Option<NodeId>,
    /// First child node
    pub first_child: Option<NodeId>,
    /// Last child node
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Index into string pool for tag name (elements) or data (text, comments)
    pub name_id: u32,
    /// Element attributes in insertion order
    pub attributes: Vec<HtmlAttribute>,
}

impl HtmlNode {
    fn with_kind(kind: NodeKind, name_id: u32) -> Self {
        HtmlNode {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name_id,
            attributes: Vec::new(),
        }
    }

    /// Create a new document root node
    pub fn document() -> Self {
        Self::with_kind(NodeKind::Document, 0)
    }

    /// Create a new, unattached element node
    pub fn element(name_id: u32) -> Self {
        Self::with_kind(NodeKind::Element, name_id)
    }

    /// Create a new, unattached text node
    pub fn text(data_id: u32) -> Self {
        Self::with_kind(NodeKind::Text, data_id)
    }

    /// Create a new, unattached comment node
    pub fn comment(data_id: u32) -> Self {
        Self::with_kind(NodeKind::Comment, data_id)
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if this node may hold children
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Document | NodeKind::Element)
    }

    /// Check if this node has attributes
    #[inline]
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

/// Stored attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlAttribute {
    /// Index into string pool for attribute name
    pub name_id: u32,
    /// Index into string pool for attribute value
    pub value_id: u32,
}

impl HtmlAttribute {
    pub fn new(name_id: u32, value_id: u32) -> Self {
        HtmlAttribute { name_id, value_id }
    }
}
