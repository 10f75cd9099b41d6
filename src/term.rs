//! Elixir Term Conversion Utilities
//!
//! Converts DOM nodes and operation results to Elixir terms.

use crate::dom::{HtmlDocument, NodeId, NodeKind};
use crate::error::DomError;
use rustler::types::atom::Atom;
use rustler::{Encoder, Env, NewBinary, NifResult, Term};

rustler::atoms! {
    ok,
    error,
    document,
    element,
    comment,
}

/// `{:error, reason}` with `reason` as an atom
pub fn reason_to_term<'a>(env: Env<'a>, reason: &str) -> NifResult<Term<'a>> {
    let reason = Atom::from_str(env, reason)?;
    Ok((error(), reason).encode(env))
}

pub fn dom_error_to_term<'a>(env: Env<'a>, err: &DomError) -> NifResult<Term<'a>> {
    reason_to_term(env, err.reason())
}

/// `{:ok, value}` / `{:error, reason}` for an operation run under the document lock
pub fn result_to_term<'a, T: Encoder>(
    env: Env<'a>,
    result: Result<Result<T, DomError>, &'static str>,
) -> NifResult<Term<'a>> {
    match result {
        Ok(Ok(value)) => Ok((ok(), value).encode(env)),
        Ok(Err(err)) => dom_error_to_term(env, &err),
        Err(reason) => reason_to_term(env, reason),
    }
}

/// `:ok` / `{:error, reason}` for an operation with no value
pub fn status_to_term<'a>(
    env: Env<'a>,
    result: Result<Result<(), DomError>, &'static str>,
) -> NifResult<Term<'a>> {
    match result {
        Ok(Ok(())) => Ok(ok().encode(env)),
        Ok(Err(err)) => dom_error_to_term(env, &err),
        Err(reason) => reason_to_term(env, reason),
    }
}

/// Convert a node and its subtree to an Elixir term
///
/// - element: `{:element, name, [{attr, value}], children}`
/// - text: binary
/// - comment: `{:comment, text}`
/// - document: `{:document, children}`
///
/// Unknown ids give `nil`. Converts without recursion; depth is bounded
/// only by the heap.
pub fn node_to_term<'a>(env: Env<'a>, doc: &HtmlDocument, node_id: NodeId) -> Term<'a> {
    doc.fold_subtree(node_id, |id, children| shallow_node_to_term(env, doc, id, children))
        .unwrap_or_else(|| rustler::types::atom::nil().encode(env))
}

/// One node, given the already converted terms of its children
fn shallow_node_to_term<'a>(
    env: Env<'a>,
    doc: &HtmlDocument,
    node_id: NodeId,
    children: Vec<Term<'a>>,
) -> Term<'a> {
    let node = match doc.get_node(node_id) {
        Some(n) => n,
        None => return rustler::types::atom::nil().encode(env),
    };

    match node.kind {
        NodeKind::Element => {
            let name_term = str_to_binary(env, doc.node_name(node_id).unwrap_or(""));

            let mut attrs = Term::list_new_empty(env);
            if node.has_attributes() {
                for (name, value) in doc.get_attribute_values(node_id).into_iter().rev() {
                    let attr_tuple = (str_to_binary(env, name), str_to_binary(env, value));
                    attrs = attrs.list_prepend(attr_tuple.encode(env));
                }
            }

            (element(), name_term, attrs, children.encode(env)).encode(env)
        }
        NodeKind::Text => str_to_binary(env, doc.text_content(node_id).unwrap_or("")),
        NodeKind::Comment => {
            let content = doc.text_content(node_id).unwrap_or("");
            (comment(), str_to_binary(env, content)).encode(env)
        }
        NodeKind::Document => (document(), children.encode(env)).encode(env),
    }
}

/// Convert a string to a binary term (more efficient than .encode())
#[inline]
fn str_to_binary<'a>(env: Env<'a>, s: &str) -> Term<'a> {
    let bytes = s.as_bytes();
    let mut binary = NewBinary::new(env, bytes.len());
    binary.as_mut_slice().copy_from_slice(bytes);
    binary.into()
}
