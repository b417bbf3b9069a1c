use std::collections::HashMap;

use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// In-process transport backed by a `HashMap`.
///
/// Can be switched to read-only to model a storage quota that rejects
/// writes (the way a full `localStorage` does).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every subsequent `set`/`remove` while `read_only` is true.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Write raw bytes regardless of the read-only flag.
    /// Useful for simulating another tab or a corrupted value.
    pub fn put_raw(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CoreError> {
        if self.read_only {
            return Err(CoreError::PersistenceWrite(format!(
                "memory store is read-only, rejected write to '{key}'"
            )));
        }
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        if self.read_only {
            return Err(CoreError::PersistenceWrite(format!(
                "memory store is read-only, rejected removal of '{key}'"
            )));
        }
        self.entries.remove(key);
        Ok(())
    }
}
