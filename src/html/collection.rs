//! Live element collections
//!
//! A collection holds only its owner's id and a filter. Every `length`,
//! `item` or `iter` call walks the owner's current children, so the view can
//! never disagree with the tree or hand out a node that has been detached
//! from the owner.

use crate::dom::{tags, ChildIter, DocumentAccess, NodeId};

/// Decides which children of the owner belong to a collection
pub trait CollectionFilter {
    fn filter<D: DocumentAccess>(&self, doc: &D, node: NodeId) -> bool;
}

/// Accepts `tr` element children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowsFilter;

impl CollectionFilter for RowsFilter {
    fn filter<D: DocumentAccess>(&self, doc: &D, node: NodeId) -> bool {
        doc.node_name(node) == Some(tags::TR)
    }
}

/// Children of one owner node that pass a filter, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveCollection<F> {
    owner: NodeId,
    filter: F,
}

/// The rows of a table section
pub type RowCollection = LiveCollection<RowsFilter>;

impl<F: CollectionFilter> LiveCollection<F> {
    pub fn new(owner: NodeId, filter: F) -> Self {
        LiveCollection { owner, filter }
    }

    /// The node whose children this collection reflects
    #[inline]
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// Iterate over the matching children as they are right now
    pub fn iter<'a, D: DocumentAccess>(&'a self, doc: &'a D) -> CollectionIter<'a, D, F> {
        CollectionIter {
            doc,
            filter: &self.filter,
            children: ChildIter::new(doc, self.owner),
        }
    }

    /// Number of matching children
    pub fn length<D: DocumentAccess>(&self, doc: &D) -> usize {
        self.iter(doc).count()
    }

    /// The `index`-th matching child, or `None` when `index` is negative or
    /// not less than the length
    pub fn item<D: DocumentAccess>(&self, doc: &D, index: i64) -> Option<NodeId> {
        let index = usize::try_from(index).ok()?;
        self.iter(doc).nth(index)
    }

    /// Last matching child
    pub fn last<D: DocumentAccess>(&self, doc: &D) -> Option<NodeId> {
        self.iter(doc).last()
    }

    pub fn to_vec<D: DocumentAccess>(&self, doc: &D) -> Vec<NodeId> {
        self.iter(doc).collect()
    }
}

/// Iterator over the members of a live collection
pub struct CollectionIter<'a, D: DocumentAccess, F> {
    doc: &'a D,
    filter: &'a F,
    children: ChildIter<'a, D>,
}

impl<'a, D: DocumentAccess, F: CollectionFilter> Iterator for CollectionIter<'a, D, F> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let doc = self.doc;
        let filter = self.filter;
        self.children.find(|&id| filter.filter(doc, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;

    /// tbody holding: text, tr, td, comment, tr
    fn section_with_mixed_children() -> (HtmlDocument, NodeId, Vec<NodeId>) {
        let mut doc = HtmlDocument::new();
        let tbody = doc.create_element("tbody").unwrap();
        doc.append_child(doc.document_id(), tbody).unwrap();

        let text = doc.create_text_node("\n  ");
        let r0 = doc.create_element("tr").unwrap();
        let cell = doc.create_element("td").unwrap();
        let comment = doc.create_comment("tr");
        let r1 = doc.create_element("TR").unwrap();
        for id in [text, r0, cell, comment, r1] {
            doc.append_child(tbody, id).unwrap();
        }
        (doc, tbody, vec![r0, r1])
    }

    #[test]
    fn test_item_and_length() {
        let (doc, tbody, rows) = section_with_mixed_children();
        let collection = RowCollection::new(tbody, RowsFilter);
        assert_eq!(collection.owner(), tbody);
        assert_eq!(collection.length(&doc), 2);
        assert_eq!(collection.item(&doc, 0), Some(rows[0]));
        assert_eq!(collection.item(&doc, 1), Some(rows[1]));
        assert_eq!(collection.last(&doc), Some(rows[1]));
    }

    #[test]
    fn test_item_out_of_range() {
        let (doc, tbody, _) = section_with_mixed_children();
        let collection = RowCollection::new(tbody, RowsFilter);
        assert_eq!(collection.item(&doc, 2), None);
        assert_eq!(collection.item(&doc, 100), None);
        assert_eq!(collection.item(&doc, -1), None);
        assert_eq!(collection.item(&doc, i64::MIN), None);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let (doc, tbody, _) = section_with_mixed_children();
        let collection = RowCollection::new(tbody, RowsFilter);
        let first = (collection.length(&doc), collection.to_vec(&doc));
        let second = (collection.length(&doc), collection.to_vec(&doc));
        assert_eq!(first, second);
        assert_eq!(doc.node_count(), 7);
    }

    #[test]
    fn test_reflects_mutation_without_refresh() {
        let (mut doc, tbody, rows) = section_with_mixed_children();
        let collection = RowCollection::new(tbody, RowsFilter);

        doc.remove(rows[0]).unwrap();
        assert_eq!(collection.to_vec(&doc), vec![rows[1]]);

        let added = doc.create_element("tr").unwrap();
        doc.insert_before(tbody, added, Some(rows[1])).unwrap();
        assert_eq!(collection.to_vec(&doc), vec![added, rows[1]]);
    }

    #[test]
    fn test_moved_row_leaves_collection() {
        let (mut doc, tbody, rows) = section_with_mixed_children();
        let other = doc.create_element("tfoot").unwrap();
        doc.append_child(doc.document_id(), other).unwrap();

        let body_rows = RowCollection::new(tbody, RowsFilter);
        let foot_rows = RowCollection::new(other, RowsFilter);

        doc.append_child(other, rows[1]).unwrap();
        assert_eq!(body_rows.to_vec(&doc), vec![rows[0]]);
        assert_eq!(foot_rows.to_vec(&doc), vec![rows[1]]);
    }

    #[test]
    fn test_grandchild_rows_are_not_members() {
        let (mut doc, tbody, rows) = section_with_mixed_children();
        let nested = doc.create_element("tr").unwrap();
        doc.append_child(rows[0], nested).unwrap();
        let collection = RowCollection::new(tbody, RowsFilter);
        assert_eq!(collection.to_vec(&doc), rows);
    }

    #[test]
    fn test_unknown_owner_is_empty() {
        let doc = HtmlDocument::new();
        let collection = RowCollection::new(42, RowsFilter);
        assert_eq!(collection.length(&doc), 0);
        assert_eq!(collection.item(&doc, 0), None);
    }
}
