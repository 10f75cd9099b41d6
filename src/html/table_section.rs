//! Table Section Element (thead / tbody / tfoot)
//!
//! Owns the section's live row collection and translates row indices into
//! one tree splice each:
//! - `insert_row(i)` inserts before the i-th row; `-1`, the row count, and
//!   any other index that resolves to no row append instead.
//! - `delete_row(i)` removes the i-th row; `-1` removes the last row, and an
//!   index that resolves to no row is a no-op.
//!
//! Neither operation fails on its own account. The only errors are those of
//! the element factory and the tree, passed through unchanged.

use super::alignment::{HorizontalAlignment, VerticalAlignment};
use super::attr::{self, get_enum_attribute, set_enum_attribute};
use super::collection::{LiveCollection, RowCollection, RowsFilter};
use crate::dom::{tags, DocumentAccess, DocumentMut, NodeId};
use crate::error::DomError;

/// Which table section an element is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableSectionKind {
    Head,
    Body,
    Foot,
}

impl TableSectionKind {
    pub fn tag_name(self) -> &'static str {
        match self {
            TableSectionKind::Head => tags::THEAD,
            TableSectionKind::Body => tags::TBODY,
            TableSectionKind::Foot => tags::TFOOT,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            tags::THEAD => Some(TableSectionKind::Head),
            tags::TBODY => Some(TableSectionKind::Body),
            tags::TFOOT => Some(TableSectionKind::Foot),
            _ => None,
        }
    }
}

/// A thead, tbody or tfoot element together with its rows collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlTableSectionElement {
    id: NodeId,
    rows: RowCollection,
}

impl HtmlTableSectionElement {
    fn bind(id: NodeId) -> Self {
        HtmlTableSectionElement {
            id,
            rows: LiveCollection::new(id, RowsFilter),
        }
    }

    /// Create a new, unattached section element
    pub fn create<D: DocumentMut>(doc: &mut D, kind: TableSectionKind) -> Result<Self, DomError> {
        let id = doc.create_element(kind.tag_name())?;
        Ok(Self::bind(id))
    }

    /// Wrap an existing thead, tbody or tfoot element
    pub fn from_node<D: DocumentAccess>(doc: &D, id: NodeId) -> Result<Self, DomError> {
        if doc.get_node(id).is_none() {
            return Err(DomError::UnknownNode(id));
        }
        match doc.node_name(id) {
            Some(tag) if tags::is_table_section(tag) => Ok(Self::bind(id)),
            other => Err(DomError::TypeMismatch {
                expected: "table section",
                found: other.unwrap_or("non-element").to_string(),
            }),
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind<D: DocumentAccess>(&self, doc: &D) -> Option<TableSectionKind> {
        doc.node_name(self.id).and_then(TableSectionKind::from_tag)
    }

    /// The rows of this section; reads always reflect the current tree
    #[inline]
    pub fn rows(&self) -> &RowCollection {
        &self.rows
    }

    /// Table sections are in the special category for tree construction
    #[inline]
    pub fn is_special(&self) -> bool {
        true
    }

    /// Table sections bound "clear the stack back to a table body context"
    #[inline]
    pub fn is_table_section_scope(&self) -> bool {
        true
    }

    pub fn align<D: DocumentAccess>(&self, doc: &D) -> HorizontalAlignment {
        get_enum_attribute(doc, self.id, attr::ALIGN, HorizontalAlignment::Center)
    }

    pub fn set_align<D: DocumentMut>(&self, doc: &mut D, value: HorizontalAlignment) -> Result<(), DomError> {
        set_enum_attribute(doc, self.id, attr::ALIGN, value)
    }

    pub fn valign<D: DocumentAccess>(&self, doc: &D) -> VerticalAlignment {
        get_enum_attribute(doc, self.id, attr::VALIGN, VerticalAlignment::Middle)
    }

    pub fn set_valign<D: DocumentMut>(&self, doc: &mut D, value: VerticalAlignment) -> Result<(), DomError> {
        set_enum_attribute(doc, self.id, attr::VALIGN, value)
    }

    /// Insert a new `tr` before the `index`-th row, or append it when no row
    /// is at `index`. Returns the new row.
    pub fn insert_row<D: DocumentMut>(&self, doc: &mut D, index: i64) -> Result<NodeId, DomError> {
        // Check the owner first so a failed splice never leaves a stray row
        match doc.get_node(self.id) {
            Some(node) if node.is_container() => {}
            Some(_) => return Err(DomError::HierarchyRequest("parent cannot have children")),
            None => return Err(DomError::UnknownNode(self.id)),
        }

        let row = self.rows.item(&*doc, index);
        let new_row = doc.create_element(tags::TR)?;

        match row {
            Some(row) => doc.insert_before(self.id, new_row, Some(row))?,
            None => {
                if index != -1 && log::log_enabled!(log::Level::Debug) {
                    let length = self.rows.length(&*doc);
                    if index != length as i64 {
                        log::debug!(
                            "insert_row({}) on section {} with {} rows appends",
                            index,
                            self.id,
                            length
                        );
                    }
                }
                doc.append_child(self.id, new_row)?;
            }
        }

        Ok(new_row)
    }

    /// Remove the `index`-th row; `-1` removes the last row. No row at
    /// `index` is a no-op.
    pub fn delete_row<D: DocumentMut>(&self, doc: &mut D, index: i64) -> Result<(), DomError> {
        let row = if index == -1 {
            self.rows.last(&*doc)
        } else {
            self.rows.item(&*doc, index)
        };

        match row {
            Some(row) => doc.remove(row),
            None => {
                log::debug!("delete_row({}) on section {} found no row", index, self.id);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;

    /// An attached tbody holding `count` rows
    fn body_with_rows(count: usize) -> (HtmlDocument, HtmlTableSectionElement, Vec<NodeId>) {
        let mut doc = HtmlDocument::new();
        let table = doc.create_element("table").unwrap();
        doc.append_child(doc.document_id(), table).unwrap();

        let section = HtmlTableSectionElement::create(&mut doc, TableSectionKind::Body).unwrap();
        doc.append_child(table, section.id()).unwrap();

        let rows = (0..count)
            .map(|_| {
                let row = doc.create_element("tr").unwrap();
                doc.append_child(section.id(), row).unwrap();
                row
            })
            .collect();
        (doc, section, rows)
    }

    #[test]
    fn test_create_kinds() {
        let mut doc = HtmlDocument::new();
        for kind in [TableSectionKind::Head, TableSectionKind::Body, TableSectionKind::Foot] {
            let section = HtmlTableSectionElement::create(&mut doc, kind).unwrap();
            assert_eq!(section.kind(&doc), Some(kind));
            assert_eq!(doc.node_name(section.id()), Some(kind.tag_name()));
            assert_eq!(doc.parent(section.id()), None);
            assert!(section.is_special());
            assert!(section.is_table_section_scope());
            assert!(tags::is_special(kind.tag_name()));
            assert!(tags::is_table_section_scope(kind.tag_name()));
            assert_eq!(section.rows().owner(), section.id());
        }
    }

    #[test]
    fn test_from_node() {
        let mut doc = HtmlDocument::new();
        let tfoot = doc.create_element("TFOOT").unwrap();
        let div = doc.create_element("div").unwrap();
        let text = doc.create_text_node("x");

        let section = HtmlTableSectionElement::from_node(&doc, tfoot).unwrap();
        assert_eq!(section.kind(&doc), Some(TableSectionKind::Foot));

        assert_eq!(
            HtmlTableSectionElement::from_node(&doc, div),
            Err(DomError::TypeMismatch {
                expected: "table section",
                found: "div".to_string()
            })
        );
        assert!(matches!(
            HtmlTableSectionElement::from_node(&doc, text),
            Err(DomError::TypeMismatch { .. })
        ));
        assert_eq!(
            HtmlTableSectionElement::from_node(&doc, 1000),
            Err(DomError::UnknownNode(1000))
        );
    }

    #[test]
    fn test_insert_row_append_sentinel() {
        let (mut doc, section, rows) = body_with_rows(2);
        let new_row = section.insert_row(&mut doc, -1).unwrap();
        assert_eq!(section.rows().to_vec(&doc), vec![rows[0], rows[1], new_row]);
        assert_eq!(section.rows().length(&doc), 3);
        assert_eq!(doc.node_name(new_row), Some("tr"));
        assert_eq!(doc.parent(new_row), Some(section.id()));
    }

    #[test]
    fn test_insert_row_before_index() {
        let (mut doc, section, rows) = body_with_rows(2);
        let new_row = section.insert_row(&mut doc, 1).unwrap();
        assert_eq!(section.rows().to_vec(&doc), vec![rows[0], new_row, rows[1]]);

        let first = section.insert_row(&mut doc, 0).unwrap();
        assert_eq!(section.rows().item(&doc, 0), Some(first));
    }

    #[test]
    fn test_insert_row_at_length_appends() {
        let (mut doc, section, rows) = body_with_rows(2);
        let new_row = section.insert_row(&mut doc, 2).unwrap();
        assert_eq!(section.rows().to_vec(&doc), vec![rows[0], rows[1], new_row]);
    }

    #[test]
    fn test_insert_row_out_of_range_appends() {
        let (mut doc, section, rows) = body_with_rows(2);
        let past_end = section.insert_row(&mut doc, 5).unwrap();
        assert_eq!(section.rows().to_vec(&doc), vec![rows[0], rows[1], past_end]);

        let negative = section.insert_row(&mut doc, -7).unwrap();
        assert_eq!(section.rows().last(&doc), Some(negative));
        assert_eq!(section.rows().length(&doc), 4);
    }

    #[test]
    fn test_insert_row_into_empty_section() {
        let (mut doc, section, _) = body_with_rows(0);
        let row = section.insert_row(&mut doc, 0).unwrap();
        assert_eq!(section.rows().to_vec(&doc), vec![row]);
    }

    #[test]
    fn test_insert_row_ignores_non_row_children() {
        let (mut doc, section, rows) = body_with_rows(2);
        let comment = doc.create_comment("between");
        doc.insert_before(section.id(), comment, Some(rows[1])).unwrap();

        let new_row = section.insert_row(&mut doc, 1).unwrap();
        assert_eq!(doc.children_vec(section.id()), vec![rows[0], comment, new_row, rows[1]]);
    }

    #[test]
    fn test_insert_row_into_text_parent_propagates() {
        let mut doc = HtmlDocument::new();
        let text = doc.create_text_node("not a section");
        // Bypass from_node to reach the tree error path
        let section = HtmlTableSectionElement::bind(text);
        let before = doc.node_count();
        assert!(matches!(
            section.insert_row(&mut doc, -1),
            Err(DomError::HierarchyRequest(_))
        ));
        assert_eq!(doc.node_count(), before);
    }

    #[test]
    fn test_insert_row_unknown_owner_creates_nothing() {
        let mut doc = HtmlDocument::new();
        let section = HtmlTableSectionElement::bind(500);
        let before = doc.node_count();
        assert_eq!(section.insert_row(&mut doc, 0), Err(DomError::UnknownNode(500)));
        assert_eq!(doc.node_count(), before);
    }

    #[test]
    fn test_delete_row() {
        let (mut doc, section, rows) = body_with_rows(2);
        section.delete_row(&mut doc, 0).unwrap();
        assert_eq!(section.rows().to_vec(&doc), vec![rows[1]]);
        assert_eq!(doc.parent(rows[0]), None);
    }

    #[test]
    fn test_delete_row_out_of_range_is_noop() {
        let (mut doc, section, rows) = body_with_rows(2);
        section.delete_row(&mut doc, 5).unwrap();
        section.delete_row(&mut doc, 2).unwrap();
        section.delete_row(&mut doc, -2).unwrap();
        assert_eq!(section.rows().to_vec(&doc), rows);
    }

    #[test]
    fn test_delete_row_last_sentinel() {
        let (mut doc, section, rows) = body_with_rows(3);
        let trailing = doc.create_element("td").unwrap();
        doc.append_child(section.id(), trailing).unwrap();

        section.delete_row(&mut doc, -1).unwrap();
        assert_eq!(section.rows().to_vec(&doc), vec![rows[0], rows[1]]);
        assert_eq!(doc.parent(trailing), Some(section.id()));
    }

    #[test]
    fn test_delete_row_last_on_empty_section() {
        let (mut doc, section, _) = body_with_rows(0);
        section.delete_row(&mut doc, -1).unwrap();
        assert_eq!(section.rows().length(&doc), 0);
    }

    #[test]
    fn test_interleaved_mutations() {
        let (mut doc, section, _) = body_with_rows(0);
        let a = section.insert_row(&mut doc, -1).unwrap();
        let b = section.insert_row(&mut doc, 0).unwrap();
        assert_eq!(section.rows().to_vec(&doc), vec![b, a]);

        section.delete_row(&mut doc, 1).unwrap();
        let c = section.insert_row(&mut doc, 1).unwrap();
        assert_eq!(section.rows().to_vec(&doc), vec![b, c]);

        // Removing through the tree is visible to the collection too
        doc.remove(b).unwrap();
        assert_eq!(section.rows().item(&doc, 0), Some(c));
        assert_eq!(section.rows().item(&doc, 1), None);
    }

    #[test]
    fn test_alignment_defaults() {
        let (doc, section, _) = body_with_rows(0);
        assert_eq!(section.align(&doc), HorizontalAlignment::Center);
        assert_eq!(section.valign(&doc), VerticalAlignment::Middle);
    }

    #[test]
    fn test_alignment_roundtrip() {
        let (mut doc, section, _) = body_with_rows(0);
        for &value in <HorizontalAlignment as attr::AttributeEnum>::MEMBERS {
            section.set_align(&mut doc, value).unwrap();
            assert_eq!(section.align(&doc), value);
        }
        for &value in <VerticalAlignment as attr::AttributeEnum>::MEMBERS {
            section.set_valign(&mut doc, value).unwrap();
            assert_eq!(section.valign(&doc), value);
        }
        assert_eq!(doc.get_attribute(section.id(), "valign"), Some("baseline"));
    }

    #[test]
    fn test_alignment_unparsable_falls_back() {
        let (mut doc, section, _) = body_with_rows(0);
        doc.set_attribute(section.id(), "align", "sideways").unwrap();
        doc.set_attribute(section.id(), "valign", "RIGHT").unwrap();
        assert_eq!(section.align(&doc), HorizontalAlignment::Center);
        assert_eq!(section.valign(&doc), VerticalAlignment::Middle);

        doc.set_attribute(section.id(), "align", "RIGHT").unwrap();
        assert_eq!(section.align(&doc), HorizontalAlignment::Right);
    }
}
