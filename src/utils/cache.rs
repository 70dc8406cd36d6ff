//! JSON values over a key-value store.
//!
//! Used with sessionStorage for data that should survive navigation but
//! not the tab: the store is cleared when the tab/window is closed.

use serde::{Serialize, de::DeserializeOwned};

use crate::core::error::StorageError;
use crate::core::storage::KeyValueStore;

/// Get cached data.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let json = store.get_item(key)?;
    serde_json::from_str(&json).ok()
}

/// Store data, replacing any previous value under `key`.
pub fn set<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    data: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(data).map_err(|_| StorageError::SerializationFailed)?;
    store.set_item(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn test_missing_and_malformed_are_none() {
        let store = MemoryStore::with_item("bad", "{truncated");
        assert_eq!(get::<Vec<u32>>(&store, "missing"), None);
        assert_eq!(get::<Vec<u32>>(&store, "bad"), None);
    }

    #[test]
    fn test_wrong_shape_is_none() {
        let store = MemoryStore::with_item("k", r#"{"a":1}"#);
        assert_eq!(get::<Vec<u32>>(&store, "k"), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        set(&store, "k", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(store.get_item("k").as_deref(), Some("[1,2,3]"));
        assert_eq!(get::<Vec<u32>>(&store, "k"), Some(vec![1, 2, 3]));
    }
}
