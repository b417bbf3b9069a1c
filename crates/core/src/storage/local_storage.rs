use web_sys::Storage;

use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// Browser transport over `window.localStorage`.
///
/// Values are stored as UTF-8 strings; the serialized state is JSON, so
/// this is lossless for everything the store writes.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Grab `window.localStorage`. Fails when there is no window or storage
    /// is disabled (e.g., some private browsing modes).
    pub fn open() -> Result<Self, CoreError> {
        let storage = web_sys::window()
            .ok_or_else(|| CoreError::StorageRead("no global window".into()))?
            .local_storage()
            .map_err(|_| CoreError::StorageRead("localStorage access denied".into()))?
            .ok_or_else(|| CoreError::StorageRead("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn name(&self) -> &str {
        "localStorage"
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError> {
        self.storage
            .get_item(key)
            .map(|v| v.map(String::into_bytes))
            .map_err(|_| CoreError::StorageRead(format!("getItem('{key}') failed")))
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CoreError> {
        let text = std::str::from_utf8(value)
            .map_err(|e| CoreError::PersistenceWrite(format!("value for '{key}' is not UTF-8: {e}")))?;
        // setItem throws QuotaExceededError when storage is full.
        self.storage
            .set_item(key, text)
            .map_err(|_| CoreError::PersistenceWrite(format!("setItem('{key}') rejected")))
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.storage
            .remove_item(key)
            .map_err(|_| CoreError::PersistenceWrite(format!("removeItem('{key}') failed")))
    }
}
