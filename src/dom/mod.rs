//! DOM Module - Arena-based HTML Document
//!
//! Implements a mutable DOM representation using:
//! - Arena allocation for nodes
//! - NodeId (u32) indices that stay valid after a node is detached
//! - String interning for tag names and attributes
//! - Sibling links so splices are O(1) relinks

pub mod document;
pub mod node;
pub mod strings;
pub mod tags;

pub use document::{ChildIter, HtmlDocument};
pub use node::{HtmlAttribute, HtmlNode, NodeId, NodeKind};
pub use strings::StringPool;

use crate::error::DomError;

/// Read access to a document - the HTML element layer is generic over this
pub trait DocumentAccess {
    /// Get a node by ID
    fn get_node(&self, id: NodeId) -> Option<&HtmlNode>;

    /// Get the tag name of an element
    fn node_name(&self, id: NodeId) -> Option<&str>;

    /// Get attribute value by name
    fn get_attribute(&self, node_id: NodeId, name: &str) -> Option<&str>;

    /// Iterate over the children of a node in document order
    fn children(&self, id: NodeId) -> ChildIter<'_, Self>
    where
        Self: Sized,
    {
        ChildIter::new(self, id)
    }

    /// Children collected into a Vec, for trait object callers
    fn children_vec(&self, id: NodeId) -> Vec<NodeId>;
}

/// Tree mutation, element factory and attribute store
pub trait DocumentMut: DocumentAccess {
    /// Create an unattached element with the given tag name
    fn create_element(&mut self, tag_name: &str) -> Result<NodeId, DomError>;

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError>;

    /// Insert `node` before `reference` under `parent`; `None` appends
    fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError>;

    /// Detach a node from its parent
    fn remove(&mut self, node: NodeId) -> Result<(), DomError>;

    /// Set an attribute, replacing any previous value
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError>;
}
