//! Browser `localStorage` backend.

use crate::error::{StorageError, StorageResult};
use crate::store::KeyValueStore;

/// `window.localStorage`, looked up on every access
///
/// Holds no JS handle so it can be shared freely between reactive owners.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
