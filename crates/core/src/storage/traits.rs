use crate::errors::CoreError;

/// Synchronous key-value persistence transport.
///
/// This is the only way the store touches durable storage. Implementations
/// must be synchronous: a mutation is not complete until `set` returns.
pub trait KeyValueStore {
    /// Human-readable transport name (for logs)
    fn name(&self) -> &str;

    /// Read the value stored under `key`. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError>;

    /// Store `value` under `key`, replacing any previous value.
    /// Failures must be reported as [`CoreError::PersistenceWrite`].
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CoreError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), CoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        (**self).remove(key)
    }
}
