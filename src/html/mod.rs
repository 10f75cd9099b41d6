//! HTML element behaviour on top of the arena DOM
//!
//! - Live collections: filtered child views recomputed on every access
//! - Typed enumerated attributes (parse with default, serialize on write)
//! - Table section elements with row insertion and deletion

pub mod alignment;
pub mod attr;
pub mod collection;
pub mod table_section;

pub use alignment::{HorizontalAlignment, ParseAlignmentError, VerticalAlignment};
pub use attr::{parse_enum, AttributeEnum};
pub use collection::{CollectionFilter, LiveCollection, RowCollection, RowsFilter};
pub use table_section::{HtmlTableSectionElement, TableSectionKind};
