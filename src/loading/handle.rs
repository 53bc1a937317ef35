//! Registry of temporary transcoded resources addressed by `blob:` URIs

use crate::io::configuration::BLOB_SCHEME;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Entries {
    next_id: u64,
    bytes: HashMap<String, Rc<[u8]>>,
}

/// Issues `blob:` URIs for in-memory image bytes
///
/// Clones share the same entries. Each entry lives exactly as long as the
/// [`BlobHandle`] returned when it was registered.
#[derive(Clone, Debug, Default)]
pub struct BlobRegistry {
    entries: Rc<RefCell<Entries>>,
}

impl BlobRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bytes` and return the handle that owns them
    pub fn register(&self, bytes: Vec<u8>) -> BlobHandle {
        let mut entries = self.entries.borrow_mut();
        entries.next_id += 1;
        let url = format!("{BLOB_SCHEME}photodrift/{}", entries.next_id);
        entries.bytes.insert(url.clone(), Rc::from(bytes));
        BlobHandle {
            url,
            registry: self.clone(),
        }
    }

    /// Bytes behind a live URI
    pub fn resolve(&self, url: &str) -> Option<Rc<[u8]>> {
        self.entries.borrow().bytes.get(url).cloned()
    }

    /// Number of live entries
    pub fn live_count(&self) -> usize {
        self.entries.borrow().bytes.len()
    }

    fn revoke(&self, url: &str) {
        self.entries.borrow_mut().bytes.remove(url);
    }
}

/// Owner of one registry entry; revokes it when dropped
#[derive(Debug)]
pub struct BlobHandle {
    url: String,
    registry: BlobRegistry,
}

impl BlobHandle {
    /// URI under which the bytes can be resolved
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for BlobHandle {
    fn drop(&mut self) {
        self.registry.revoke(&self.url);
    }
}
