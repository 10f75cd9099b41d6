//! Typed access to enumerated attributes
//!
//! Reads parse the attribute string against a fixed member table and fall
//! back to a default when the attribute is absent or unparsable. Writes
//! store the member's canonical string.

use crate::dom::{DocumentAccess, DocumentMut, NodeId};
use crate::error::DomError;

pub const ALIGN: &str = "align";
pub const VALIGN: &str = "valign";

/// An enumeration stored as an attribute string
pub trait AttributeEnum: Copy + Sized + 'static {
    /// Every member, in declaration order
    const MEMBERS: &'static [Self];

    /// Canonical attribute value
    fn as_str(&self) -> &'static str;

    /// Match a value ASCII case-insensitively, ignoring surrounding whitespace
    fn parse_attribute(value: &str) -> Option<Self> {
        let value = value.trim_matches(|c: char| c.is_ascii_whitespace());
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.as_str().eq_ignore_ascii_case(value))
    }
}

/// Parse an optional attribute value, falling back to `default`
pub fn parse_enum<T: AttributeEnum>(value: Option<&str>, default: T) -> T {
    value.and_then(T::parse_attribute).unwrap_or(default)
}

pub fn get_enum_attribute<D, T>(doc: &D, node: NodeId, name: &str, default: T) -> T
where
    D: DocumentAccess,
    T: AttributeEnum,
{
    parse_enum(doc.get_attribute(node, name), default)
}

pub fn set_enum_attribute<D, T>(doc: &mut D, node: NodeId, name: &str, value: T) -> Result<(), DomError>
where
    D: DocumentMut,
    T: AttributeEnum,
{
    doc.set_attribute(node, name, value.as_str())
}
