//! HTML Document - Arena-based DOM representation
//!
//! Mutable DOM storage with:
//! - Arena allocation for nodes (the document node is always id 0)
//! - NodeId indices for traversal
//! - String interning for names and attribute values
//! - Detach/insert as sibling relinks; detached nodes keep their slot

use super::node::{HtmlAttribute, HtmlNode, NodeId, NodeKind};
use super::strings::StringPool;
use super::{DocumentAccess, DocumentMut};
use crate::error::DomError;
use memchr::memchr3;

/// An HTML document stored in arena format
#[derive(Debug)]
pub struct HtmlDocument {
    /// Arena of nodes
    nodes: Vec<HtmlNode>,
    /// Interned strings
    pub strings: StringPool,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlDocument {
    /// Create an empty document holding only the document node
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(HtmlNode::document());
        HtmlDocument {
            nodes,
            strings: StringPool::new(),
        }
    }

    /// Get the document node ID
    #[inline]
    pub fn document_id(&self) -> NodeId {
        0
    }

    /// Get total number of nodes, attached or not
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&HtmlNode> {
        self.nodes.get(id as usize)
    }

    fn node(&self, id: NodeId) -> Result<&HtmlNode, DomError> {
        self.nodes.get(id as usize).ok_or(DomError::UnknownNode(id))
    }

    fn push_node(&mut self, node: HtmlNode) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    // ------------------------------------------------------------------
    // Factory
    // ------------------------------------------------------------------

    /// Create an unattached element. ASCII letters in the tag name are lowercased.
    pub fn create_element(&mut self, tag_name: &str) -> Result<NodeId, DomError> {
        validate_name(tag_name)?;
        let name_id = self.strings.intern_str(&tag_name.to_ascii_lowercase());
        let id = self.push_node(HtmlNode::element(name_id));
        log::trace!("create_element <{}> -> {}", tag_name, id);
        Ok(id)
    }

    /// Create an unattached text node
    pub fn create_text_node(&mut self, data: &str) -> NodeId {
        let data_id = self.strings.intern_str(data);
        self.push_node(HtmlNode::text(data_id))
    }

    /// Create an unattached comment node
    pub fn create_comment(&mut self, data: &str) -> NodeId {
        let data_id = self.strings.intern_str(data);
        self.push_node(HtmlNode::comment(data_id))
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Get the tag name of an element
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        let node = self.get_node(id)?;
        if node.is_element() {
            self.strings.get_str(node.name_id)
        } else {
            None
        }
    }

    /// Get the data of a text or comment node
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        let node = self.get_node(id)?;
        match node.kind {
            NodeKind::Text | NodeKind::Comment => self.strings.get_str(node.name_id),
            _ => None,
        }
    }

    /// Get the parent of a node (None for the document and detached nodes)
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get_node(id).and_then(|n| n.parent)
    }

    /// Get attribute value by name (names are matched ASCII case-insensitively)
    pub fn get_attribute(&self, node_id: NodeId, name: &str) -> Option<&str> {
        let node = self.get_node(node_id)?;
        let name_id = self.strings.lookup(name.to_ascii_lowercase().as_bytes())?;
        node.attributes
            .iter()
            .find(|attr| attr.name_id == name_id)
            .and_then(|attr| self.strings.get_str(attr.value_id))
    }

    /// Get all attribute names and values for a node
    pub fn get_attribute_values(&self, node_id: NodeId) -> Vec<(&str, &str)> {
        let Some(node) = self.get_node(node_id) else {
            return Vec::new();
        };
        node.attributes
            .iter()
            .filter_map(|attr| {
                let name = self.strings.get_str(attr.name_id)?;
                let value = self.strings.get_str(attr.value_id)?;
                Some((name, value))
            })
            .collect()
    }

    /// Fold a subtree bottom-up. `f` receives each node together with the
    /// results of its children in document order; the root's result is
    /// returned. Walks with an explicit stack, so nesting depth is bounded
    /// only by the heap.
    pub fn fold_subtree<T, F>(&self, root: NodeId, mut f: F) -> Option<T>
    where
        F: FnMut(NodeId, Vec<T>) -> T,
    {
        let first = self.get_node(root)?.first_child;
        let mut stack: Vec<(NodeId, Option<NodeId>, Vec<T>)> = vec![(root, first, Vec::new())];

        while let Some(frame) = stack.last_mut() {
            match frame.1 {
                Some(child) => {
                    let node = self.get_node(child)?;
                    frame.1 = node.next_sibling;
                    stack.push((child, node.first_child, Vec::new()));
                }
                None => {
                    let (id, _, results) = stack.pop()?;
                    let value = f(id, results);
                    match stack.last_mut() {
                        Some(parent) => parent.2.push(value),
                        None => return Some(value),
                    }
                }
            }
        }
        None
    }

    /// Check if `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    // ------------------------------------------------------------------
    // Attribute store
    // ------------------------------------------------------------------

    /// Set an attribute on an element, replacing any previous value
    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        validate_name(name)?;
        self.expect_element(node_id)?;

        let name_id = self.strings.intern_str(&name.to_ascii_lowercase());
        let value_id = self.strings.intern_str(value);
        let node = &mut self.nodes[node_id as usize];
        match node.attributes.iter_mut().find(|attr| attr.name_id == name_id) {
            Some(attr) => attr.value_id = value_id,
            None => node.attributes.push(HtmlAttribute::new(name_id, value_id)),
        }
        Ok(())
    }

    /// Remove an attribute, returning whether it was present
    pub fn remove_attribute(&mut self, node_id: NodeId, name: &str) -> Result<bool, DomError> {
        self.expect_element(node_id)?;
        let Some(name_id) = self.strings.lookup(name.to_ascii_lowercase().as_bytes()) else {
            return Ok(false);
        };
        let node = &mut self.nodes[node_id as usize];
        let before = node.attributes.len();
        node.attributes.retain(|attr| attr.name_id != name_id);
        Ok(node.attributes.len() != before)
    }

    fn expect_element(&self, id: NodeId) -> Result<(), DomError> {
        let node = self.node(id)?;
        if node.is_element() {
            Ok(())
        } else {
            Err(DomError::TypeMismatch {
                expected: "element",
                found: kind_name(node.kind).to_string(),
            })
        }
    }

    // ------------------------------------------------------------------
    // Tree mutation
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent`, moving it if already attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    /// Insert `node` under `parent` immediately before `reference`.
    /// A `None` reference appends. An attached `node` is moved.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        self.ensure_pre_insertion_validity(parent, node, reference)?;

        // Inserting a node before itself keeps its position relative to the next sibling
        let reference = match reference {
            Some(r) if r == node => self.nodes[node as usize].next_sibling,
            other => other,
        };

        self.detach(node);
        self.link_before(parent, node, reference);
        log::trace!("insert {} under {} before {:?}", node, parent, reference);
        Ok(())
    }

    /// Detach a node from its parent. Removing a detached node is a no-op.
    pub fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        self.node(node)?;
        if let Some(parent) = self.parent(node) {
            self.detach(node);
            log::trace!("remove {} from {}", node, parent);
        }
        Ok(())
    }

    fn ensure_pre_insertion_validity(
        &self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        if !self.node(parent)?.is_container() {
            return Err(DomError::HierarchyRequest("parent cannot have children"));
        }
        if self.node(node)?.kind == NodeKind::Document {
            return Err(DomError::HierarchyRequest("document cannot be inserted"));
        }
        if self.is_inclusive_ancestor(node, parent) {
            return Err(DomError::HierarchyRequest("node is an inclusive ancestor of the parent"));
        }
        if let Some(reference) = reference {
            if self.node(reference)?.parent != Some(parent) {
                return Err(DomError::NotFound);
            }
        }
        Ok(())
    }

    /// Unlink a node from its parent and siblings
    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id as usize];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        let Some(parent) = parent else {
            return;
        };

        match prev {
            Some(p) => self.nodes[p as usize].next_sibling = next,
            None => self.nodes[parent as usize].first_child = next,
        }
        match next {
            Some(n) => self.nodes[n as usize].prev_sibling = prev,
            None => self.nodes[parent as usize].last_child = prev,
        }

        let node = &mut self.nodes[id as usize];
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Link a detached node into `parent` before `reference` (or last)
    fn link_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) {
        let prev = match reference {
            Some(r) => self.nodes[r as usize].prev_sibling,
            None => self.nodes[parent as usize].last_child,
        };

        {
            let node = &mut self.nodes[child as usize];
            node.parent = Some(parent);
            node.prev_sibling = prev;
            node.next_sibling = reference;
        }

        match prev {
            Some(p) => self.nodes[p as usize].next_sibling = Some(child),
            None => self.nodes[parent as usize].first_child = Some(child),
        }
        match reference {
            Some(r) => self.nodes[r as usize].prev_sibling = Some(child),
            None => self.nodes[parent as usize].last_child = Some(child),
        }
    }
}

/// Reject names that cannot be tag or attribute names
fn validate_name(name: &str) -> Result<(), DomError> {
    let bytes = name.as_bytes();
    let invalid = bytes.is_empty()
        || memchr3(b'<', b'>', b'/', bytes).is_some()
        || memchr3(b'=', b'"', b'\'', bytes).is_some()
        || memchr3(b' ', b'\t', b'\n', bytes).is_some()
        || memchr3(b'\r', 0x0C, 0, bytes).is_some();
    if invalid {
        Err(DomError::InvalidCharacter(name.to_string()))
    } else {
        Ok(())
    }
}

fn kind_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Document => "document",
        NodeKind::Element => "element",
        NodeKind::Text => "text",
        NodeKind::Comment => "comment",
    }
}

/// Iterator over child nodes
pub struct ChildIter<'a, D: DocumentAccess + ?Sized> {
    doc: &'a D,
    next: Option<NodeId>,
}

impl<'a, D: DocumentAccess + ?Sized> ChildIter<'a, D> {
    pub fn new(doc: &'a D, parent: NodeId) -> Self {
        let next = doc.get_node(parent).and_then(|n| n.first_child);
        ChildIter { doc, next }
    }
}

impl<'a, D: DocumentAccess + ?Sized> Iterator for ChildIter<'a, D> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.get_node(current).and_then(|n| n.next_sibling);
        Some(current)
    }
}

impl DocumentAccess for HtmlDocument {
    fn get_node(&self, id: NodeId) -> Option<&HtmlNode> {
        HtmlDocument::get_node(self, id)
    }

    fn node_name(&self, id: NodeId) -> Option<&str> {
        HtmlDocument::node_name(self, id)
    }

    fn get_attribute(&self, node_id: NodeId, name: &str) -> Option<&str> {
        HtmlDocument::get_attribute(self, node_id, name)
    }

    fn children_vec(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id).collect()
    }
}

impl DocumentMut for HtmlDocument {
    fn create_element(&mut self, tag_name: &str) -> Result<NodeId, DomError> {
        HtmlDocument::create_element(self, tag_name)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        HtmlDocument::append_child(self, parent, child)
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        HtmlDocument::insert_before(self, parent, node, reference)
    }

    fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        HtmlDocument::remove(self, node)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        HtmlDocument::set_attribute(self, node, name, value)
    }
}
