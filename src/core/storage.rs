//! String key-value storage behind a trait.
//!
//! The browser exposes two areas with the same API: `sessionStorage`
//! (cleared when the tab closes) and `localStorage` (persistent). Core
//! logic talks to [`KeyValueStore`] so tests can swap in an in-process
//! store.

#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::HashMap;

use web_sys::Storage;

use crate::core::error::StorageError;
use crate::utils::dom;

/// Minimal string store with the semantics of the Web Storage API.
pub trait KeyValueStore {
    /// Read a value. Missing keys and unreadable storage both yield `None`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

// =============================================================================
// Browser storage
// =============================================================================

/// A Web Storage area. Holds `None` when the browser refuses access.
#[derive(Clone)]
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    /// Session-scoped storage.
    pub fn session() -> Self {
        Self {
            storage: dom::session_storage(),
        }
    }

    /// Persistent storage.
    pub fn local() -> Self {
        Self {
            storage: dom::local_storage(),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .as_ref()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }
}

// =============================================================================
// In-memory storage
// =============================================================================

/// Process-local store. Counts writes so tests can assert on side effects.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry. The seed does not count as a write.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Number of successful `set_item` calls.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k"), None);

        store.set_item("k", "one").unwrap();
        store.set_item("k", "two").unwrap();
        assert_eq!(store.get_item("k").as_deref(), Some("two"));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_seeded_store_has_no_writes() {
        let store = MemoryStore::with_item("theme", "dark");
        assert_eq!(store.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_store_by_reference() {
        fn write_through(store: impl KeyValueStore) {
            store.set_item("a", "1").unwrap();
        }

        let store = MemoryStore::new();
        write_through(&store);
        assert_eq!(store.get_item("a").as_deref(), Some("1"));
    }
}
