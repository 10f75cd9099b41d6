//! RustyDOM - Arena-based HTML DOM with table section editing
//!
//! Layers:
//! - dom: mutable node arena, attribute store, element factory
//! - html: live collections, typed attributes, table section rows
//! - NIF surface: documents as ResourceArc handles, nodes as integer ids

use rustler::{Env, NifResult, ResourceArc, Term};

pub mod dom;
pub mod error;
pub mod html;
mod resource;
mod term;

use dom::{tags, NodeId};
use error::DomError;
use html::{HorizontalAlignment, HtmlTableSectionElement, TableSectionKind, VerticalAlignment};
use resource::{DocumentRef, DocumentResource};
use term::{node_to_term, reason_to_term, result_to_term, status_to_term};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// Documents and Nodes
// ============================================================================

/// Create an empty document
#[rustler::nif]
fn new_document() -> DocumentRef {
    ResourceArc::new(DocumentResource::new())
}

/// Create an unattached element, returns {:ok, id} or {:error, reason}
#[rustler::nif]
fn create_element<'a>(env: Env<'a>, doc_ref: DocumentRef, tag: &str) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| doc.create_element(tag));
    result_to_term(env, result)
}

/// Create an unattached text node
#[rustler::nif]
fn create_text_node<'a>(env: Env<'a>, doc_ref: DocumentRef, data: &str) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| Ok(doc.create_text_node(data)));
    result_to_term(env, result)
}

#[rustler::nif]
fn append_child<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    parent: NodeId,
    child: NodeId,
) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| doc.append_child(parent, child));
    status_to_term(env, result)
}

/// Insert `node` before `reference` (nil appends)
#[rustler::nif]
fn insert_before<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    parent: NodeId,
    node: NodeId,
    reference: Option<NodeId>,
) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| doc.insert_before(parent, node, reference));
    status_to_term(env, result)
}

#[rustler::nif]
fn remove_node<'a>(env: Env<'a>, doc_ref: DocumentRef, node: NodeId) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| doc.remove(node));
    status_to_term(env, result)
}

/// Get a node as {:element, name, attrs, children}, or nil
#[rustler::nif]
fn get_node<'a>(env: Env<'a>, doc_ref: DocumentRef, node: NodeId) -> NifResult<Term<'a>> {
    match doc_ref.with_doc(|doc| node_to_term(env, doc, node)) {
        Ok(term) => Ok(term),
        Err(reason) => reason_to_term(env, reason),
    }
}

#[rustler::nif]
fn get_attribute<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    node: NodeId,
    name: &str,
) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc(|doc| -> Result<_, DomError> {
        if doc.get_node(node).is_none() {
            return Err(DomError::UnknownNode(node));
        }
        Ok(doc.get_attribute(node, name).map(str::to_string))
    });
    result_to_term(env, result)
}

#[rustler::nif]
fn set_attribute<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    node: NodeId,
    name: &str,
    value: &str,
) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| doc.set_attribute(node, name, value));
    status_to_term(env, result)
}

/// {:ok, true} if the attribute was present and removed
#[rustler::nif]
fn remove_attribute<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    node: NodeId,
    name: &str,
) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| doc.remove_attribute(node, name));
    result_to_term(env, result)
}

/// Whether an element is in the special category for tree construction
#[rustler::nif]
fn is_special<'a>(env: Env<'a>, doc_ref: DocumentRef, node: NodeId) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc(|doc| -> Result<_, DomError> {
        doc.get_node(node).ok_or(DomError::UnknownNode(node))?;
        Ok(doc.node_name(node).is_some_and(tags::is_special))
    });
    result_to_term(env, result)
}

/// Whether an element bounds "clear the stack back to a table body context"
#[rustler::nif]
fn is_table_section_scope<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    node: NodeId,
) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc(|doc| -> Result<_, DomError> {
        doc.get_node(node).ok_or(DomError::UnknownNode(node))?;
        Ok(doc.node_name(node).is_some_and(tags::is_table_section_scope))
    });
    result_to_term(env, result)
}

// ============================================================================
// Table Sections
// ============================================================================

/// Create an unattached thead, tbody or tfoot
#[rustler::nif]
fn create_table_section<'a>(env: Env<'a>, doc_ref: DocumentRef, tag: &str) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| -> Result<_, DomError> {
        let kind = TableSectionKind::from_tag(&tag.to_ascii_lowercase()).ok_or_else(|| {
            DomError::TypeMismatch {
                expected: "table section",
                found: tag.to_string(),
            }
        })?;
        HtmlTableSectionElement::create(doc, kind).map(|section| section.id())
    });
    result_to_term(env, result)
}

/// Row ids of a section in document order
#[rustler::nif]
fn rows<'a>(env: Env<'a>, doc_ref: DocumentRef, section: NodeId) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc(|doc| -> Result<_, DomError> {
        let section = HtmlTableSectionElement::from_node(doc, section)?;
        Ok(section.rows().to_vec(doc))
    });
    result_to_term(env, result)
}

#[rustler::nif]
fn rows_length<'a>(env: Env<'a>, doc_ref: DocumentRef, section: NodeId) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc(|doc| -> Result<_, DomError> {
        let section = HtmlTableSectionElement::from_node(doc, section)?;
        Ok(section.rows().length(doc))
    });
    result_to_term(env, result)
}

/// {:ok, row_id} or {:ok, nil} when no row is at `index`
#[rustler::nif]
fn row_item<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    section: NodeId,
    index: i64,
) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc(|doc| -> Result<_, DomError> {
        let section = HtmlTableSectionElement::from_node(doc, section)?;
        Ok(section.rows().item(doc, index))
    });
    result_to_term(env, result)
}

#[rustler::nif]
fn insert_row<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    section: NodeId,
    index: i64,
) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| -> Result<_, DomError> {
        let section = HtmlTableSectionElement::from_node(&*doc, section)?;
        section.insert_row(doc, index)
    });
    result_to_term(env, result)
}

#[rustler::nif]
fn delete_row<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    section: NodeId,
    index: i64,
) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc_mut(|doc| -> Result<_, DomError> {
        let section = HtmlTableSectionElement::from_node(&*doc, section)?;
        section.delete_row(doc, index)
    });
    status_to_term(env, result)
}

#[rustler::nif]
fn get_align<'a>(env: Env<'a>, doc_ref: DocumentRef, section: NodeId) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc(|doc| -> Result<_, DomError> {
        let section = HtmlTableSectionElement::from_node(doc, section)?;
        Ok(section.align(doc).to_string())
    });
    result_to_term(env, result)
}

#[rustler::nif]
fn set_align<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    section: NodeId,
    value: &str,
) -> NifResult<Term<'a>> {
    let Ok(value) = value.parse::<HorizontalAlignment>() else {
        return reason_to_term(env, "invalid_alignment");
    };
    let result = doc_ref.with_doc_mut(|doc| -> Result<_, DomError> {
        let section = HtmlTableSectionElement::from_node(&*doc, section)?;
        section.set_align(doc, value)
    });
    status_to_term(env, result)
}

#[rustler::nif]
fn get_valign<'a>(env: Env<'a>, doc_ref: DocumentRef, section: NodeId) -> NifResult<Term<'a>> {
    let result = doc_ref.with_doc(|doc| -> Result<_, DomError> {
        let section = HtmlTableSectionElement::from_node(doc, section)?;
        Ok(section.valign(doc).to_string())
    });
    result_to_term(env, result)
}

#[rustler::nif]
fn set_valign<'a>(
    env: Env<'a>,
    doc_ref: DocumentRef,
    section: NodeId,
    value: &str,
) -> NifResult<Term<'a>> {
    let Ok(value) = value.parse::<VerticalAlignment>() else {
        return reason_to_term(env, "invalid_alignment");
    };
    let result = doc_ref.with_doc_mut(|doc| -> Result<_, DomError> {
        let section = HtmlTableSectionElement::from_node(&*doc, section)?;
        section.set_valign(doc, value)
    });
    status_to_term(env, result)
}

// ============================================================================
// NIF Initialization
// ============================================================================

rustler::init!("Elixir.RustyDOM.Native");
