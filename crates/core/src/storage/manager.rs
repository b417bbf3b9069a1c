use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::theme::Theme;
use crate::models::vendor_data::VendorData;

use super::format;
use super::traits::KeyValueStore;

/// High-level storage operations: seed, load and save `VendorData` and the
/// theme preference through any [`KeyValueStore`].
pub struct StorageManager;

impl StorageManager {
    /// Write seed data under `key` if nothing is stored there yet.
    /// Returns `true` when seeding happened. Calling again is a no-op.
    pub fn initialize<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> Result<bool, CoreError> {
        if store.get(key)?.is_some() {
            debug!(key, transport = store.name(), "vendor data already present");
            return Ok(false);
        }
        Self::save(store, key, &VendorData::seed())?;
        info!(key, transport = store.name(), "seeded vendor data");
        Ok(true)
    }

    /// Read and decode the stored `VendorData`.
    ///
    /// A missing key is reported as [`CoreError::CorruptState`] as well:
    /// either way there is no usable state and the caller should re-seed.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<VendorData, CoreError> {
        let bytes = store
            .get(key)?
            .ok_or_else(|| CoreError::CorruptState(format!("no vendor data stored under '{key}'")))?;
        format::decode(&bytes)
    }

    /// Encode and write `data` under `key`.
    pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, data: &VendorData) -> Result<(), CoreError> {
        let bytes = format::encode(data)?;
        store.set(key, &bytes).map_err(|e| match e {
            CoreError::PersistenceWrite(_) => e,
            other => CoreError::PersistenceWrite(other.to_string()),
        })?;
        debug!(key, bytes = bytes.len(), "persisted vendor data");
        Ok(())
    }

    /// Load the state, falling back to fresh seed data when the stored
    /// value is missing or corrupt. The seed is persisted before returning.
    pub fn load_or_reseed<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> Result<VendorData, CoreError> {
        match Self::load(store, key) {
            Ok(data) => Ok(data),
            Err(CoreError::CorruptState(reason)) => {
                warn!(key, %reason, "stored vendor data unusable, re-seeding");
                let data = VendorData::seed();
                Self::save(store, key, &data)?;
                Ok(data)
            }
            Err(e) => Err(e),
        }
    }

    /// Read the stored theme. Missing or unrecognized values yield `None`.
    pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Option<Theme>, CoreError> {
        let theme = store
            .get(key)?
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .and_then(|s| Theme::parse(s.trim()));
        Ok(theme)
    }

    pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, theme: Theme) -> Result<(), CoreError> {
        store.set(key, theme.as_str().as_bytes())
    }
}
