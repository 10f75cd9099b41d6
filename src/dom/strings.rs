//! String Interning Pool
//!
//! Deduplicated storage for tag names, attribute names and attribute values.
//! Every string is copied into one shared buffer and addressed by a `u32` id;
//! id 0 is reserved for the empty string.
//!
//! Uses hash-based lookup to avoid storing duplicate string data.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// String interning pool
///
/// Memory layout:
/// - `entries`: (offset, length) into `data` for each interned string ID
/// - `data`: buffer holding every interned string back to back
/// - `hash_index`: hash -> list of IDs (handles rare collisions)
#[derive(Debug)]
pub struct StringPool {
    /// Entries indexed by string ID
    entries: Vec<(u32, u32)>,
    /// Buffer for interned bytes
    data: Vec<u8>,
    /// Hash of string content -> list of IDs with that hash
    hash_index: HashMap<u64, Vec<u32>>,
}

impl Default for StringPool {
    fn default() -> Self {
        Self::new()
    }
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        let mut pool = StringPool {
            entries: Vec::with_capacity(64),
            data: Vec::with_capacity(1024),
            hash_index: HashMap::new(),
        };
        // Entry 0 is reserved for the empty string
        pool.entries.push((0, 0));
        pool
    }

    #[inline]
    fn compute_hash(s: &[u8]) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        let mut hasher = DefaultHasher::new();
        s.hash(&mut hasher);
        hasher.finish()
    }

    /// Find the ID of an already interned string without inserting it
    pub fn lookup(&self, s: &[u8]) -> Option<u32> {
        if s.is_empty() {
            return Some(0);
        }
        let ids = self.hash_index.get(&Self::compute_hash(s))?;
        ids.iter().copied().find(|&id| self.get(id) == Some(s))
    }

    /// Intern a string, returning the existing ID when the content is already stored
    pub fn intern(&mut self, s: &[u8]) -> u32 {
        if s.is_empty() {
            return 0;
        }

        let hash = Self::compute_hash(s);
        if let Some(ids) = self.hash_index.get(&hash) {
            for &id in ids {
                if self.get(id) == Some(s) {
                    return id;
                }
            }
        }

        let offset = self.data.len() as u32;
        self.data.extend_from_slice(s);

        let id = self.entries.len() as u32;
        self.entries.push((offset, s.len() as u32));
        self.hash_index.entry(hash).or_default().push(id);

        id
    }

    /// Intern a `&str`
    #[inline]
    pub fn intern_str(&mut self, s: &str) -> u32 {
        self.intern(s.as_bytes())
    }

    /// Get a string by ID
    pub fn get(&self, id: u32) -> Option<&[u8]> {
        let &(offset, len) = self.entries.get(id as usize)?;
        let start = offset as usize;
        self.data.get(start..start + len as usize)
    }

    /// Get a string by ID as UTF-8 str
    pub fn get_str(&self, id: u32) -> Option<&str> {
        self.get(id).and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Get the number of unique strings stored (including the reserved empty entry)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1 // Entry 0 is reserved
    }

    /// Get total bytes used for string storage
    pub fn bytes_used(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern() {
        let mut pool = StringPool::new();
        let id = pool.intern(b"tbody");
        assert!(id > 0);
        assert_eq!(pool.get(id), Some(b"tbody" as &[u8]));
        assert_eq!(pool.get_str(id), Some("tbody"));
    }

    #[test]
    fn test_intern_duplicate() {
        let mut pool = StringPool::new();
        let id1 = pool.intern(b"tr");
        let id2 = pool.intern_str("tr");
        assert_eq!(id1, id2);
        assert_eq!(pool.bytes_used(), 2);
    }

    #[test]
    fn test_intern_different() {
        let mut pool = StringPool::new();
        let id1 = pool.intern(b"align");
        let id2 = pool.intern(b"valign");
        assert_ne!(id1, id2);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_empty_string() {
        let mut pool = StringPool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.intern(b""), 0);
        assert_eq!(pool.get(0), Some(b"" as &[u8]));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let mut pool = StringPool::new();
        assert_eq!(pool.lookup(b"align"), None);
        assert_eq!(pool.len(), 1);
        let id = pool.intern(b"align");
        assert_eq!(pool.lookup(b"align"), Some(id));
    }

    #[test]
    fn test_unknown_id() {
        let pool = StringPool::new();
        assert_eq!(pool.get(42), None);
        assert_eq!(pool.get_str(42), None);
    }
}
