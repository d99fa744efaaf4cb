//! Byte-level record storage.

use dashmap::DashMap;
use tracing::{debug, instrument};

use crate::error::StoreError;

/// Stores opaque bytes by key.
///
/// The archive only needs put, get and delete; anything that can do those
/// (a database table, a file tree, a remote cache) can back it.
pub trait RecordStore: Send + Sync {
    fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), StoreError>;

    /// Returns `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Returns whether the key was present.
    fn delete(&self, key: &str) -> Result<bool, StoreError>;

    /// Every key starting with `prefix`, sorted.
    fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}

/// In-process store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RecordStore for MemoryStore {
    #[instrument(skip(self, bytes), fields(store.operation = "PUT"))]
    fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        debug!(record.key = %key, record.bytes = bytes.len(), "Record stored");
        self.entries.insert(key.to_string(), bytes);
        Ok(())
    }

    #[instrument(skip(self), fields(store.operation = "GET"))]
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let bytes = self.entries.get(key).map(|entry| entry.value().clone());
        if bytes.is_none() {
            debug!(record.key = %key, "Record miss");
        }
        Ok(bytes)
    }

    #[instrument(skip(self), fields(store.operation = "DEL"))]
    fn delete(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.remove(key).is_some())
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort_unstable();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_delete() {
        let store = MemoryStore::new();
        store.put("academia:student:1", b"{}".to_vec()).unwrap();
        assert_eq!(store.get("academia:student:1").unwrap(), Some(b"{}".to_vec()));
        assert_eq!(store.len(), 1);

        assert!(store.delete("academia:student:1").unwrap());
        assert!(!store.delete("academia:student:1").unwrap());
        assert_eq!(store.get("academia:student:1").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("k", b"old".to_vec()).unwrap();
        store.put("k", b"new".to_vec()).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn test_keys_by_prefix() {
        let store = MemoryStore::new();
        for key in ["a:student:2", "a:student:1", "a:teacher:1"] {
            store.put(key, Vec::new()).unwrap();
        }
        assert_eq!(
            store.keys("a:student:").unwrap(),
            vec!["a:student:1".to_string(), "a:student:2".to_string()]
        );
        assert_eq!(store.keys("").unwrap().len(), 3);
    }

    #[test]
    fn test_concurrent_writes() {
        let store = MemoryStore::new();
        std::thread::scope(|scope| {
            for t in 0..4 {
                let store = &store;
                scope.spawn(move || {
                    for i in 0..25 {
                        store.put(&format!("k:{t}:{i}"), vec![t as u8]).unwrap();
                    }
                });
            }
        });
        assert_eq!(store.len(), 100);
    }
}
