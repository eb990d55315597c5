//! In-memory storage implementation for tests and ephemeral runs.

use super::{StoragePort, StorageResult};
use std::collections::HashMap;

/// `HashMap`-backed storage; contents vanish when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys. Test helper.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStorage;
    use crate::storage::StoragePort;

    #[test]
    fn put_get_remove_clear_roundtrip() {
        let mut storage = MemoryStorage::new();
        storage.put("a", "1").unwrap();
        storage.put("b", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));

        storage.remove("a").unwrap();
        assert_eq!(storage.get("a").unwrap(), None);

        storage.clear().unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut storage = MemoryStorage::new();
        storage.remove("missing").unwrap();
    }
}
