//! DOM Error Types
//!
//! Failures of the tree, attribute store and element factory. The HTML
//! element layer adds no error kind of its own: out-of-range row lookups are
//! `None`, and row mutations degrade to append or no-op.

use crate::dom::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The id does not address a node in this document's arena
    #[error("Unknown node id: {0}")]
    UnknownNode(NodeId),

    /// A tag or attribute name contains a character names may not contain
    #[error("Invalid character in name: {0:?}")]
    InvalidCharacter(String),

    /// The reference node is not a child of the given parent
    #[error("Reference node is not a child of the parent")]
    NotFound,

    /// The insertion would produce an invalid tree
    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(&'static str),

    /// The node exists but is not the element kind the caller asked for
    #[error("Expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

impl DomError {
    /// Stable snake_case reason, used as the error atom on the NIF boundary
    pub fn reason(&self) -> &'static str {
        match self {
            DomError::UnknownNode(_) => "unknown_node",
            DomError::InvalidCharacter(_) => "invalid_character",
            DomError::NotFound => "not_found",
            DomError::HierarchyRequest(_) => "hierarchy_request",
            DomError::TypeMismatch { .. } => "type_mismatch",
        }
    }
}
