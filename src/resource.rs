//! ResourceArc Wrappers
//!
//! Persistent document state handed to the BEAM. The DOM itself has no
//! locking; the mutex only serializes NIF calls that share one handle.

use crate::dom::HtmlDocument;
use rustler::ResourceArc;
use std::sync::Mutex;

/// Wrapper for HtmlDocument that can be stored in a ResourceArc
pub struct DocumentResource {
    pub doc: Mutex<HtmlDocument>,
}

impl DocumentResource {
    pub fn new() -> Self {
        DocumentResource {
            doc: Mutex::new(HtmlDocument::new()),
        }
    }

    /// Run a read-only operation against the document.
    ///
    /// # Errors
    ///
    /// Returns `"mutex_poisoned"` if the document mutex is poisoned.
    pub fn with_doc<F, R>(&self, f: F) -> Result<R, &'static str>
    where
        F: FnOnce(&HtmlDocument) -> R,
    {
        let guard = self.doc.lock().map_err(|_| "mutex_poisoned")?;
        Ok(f(&guard))
    }

    /// Run a mutating operation against the document.
    ///
    /// # Errors
    ///
    /// Returns `"mutex_poisoned"` if the document mutex is poisoned.
    pub fn with_doc_mut<F, R>(&self, f: F) -> Result<R, &'static str>
    where
        F: FnOnce(&mut HtmlDocument) -> R,
    {
        let mut guard = self.doc.lock().map_err(|_| "mutex_poisoned")?;
        Ok(f(&mut guard))
    }
}

#[rustler::resource_impl]
impl rustler::Resource for DocumentResource {}

impl Default for DocumentResource {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for document ResourceArc
pub type DocumentRef = ResourceArc<DocumentResource>;
