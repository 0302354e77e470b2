//! Persistence Helper
//!
//! JSON values in a browser-local key-value store.
//! Implementations can use `window.localStorage`, in-memory, etc.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::PersistedListState;

/// Key holding [`PersistedListState`]
pub const LIST_STATE_KEY: &str = "list_state";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Raw string key-value store
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Option<String>;

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// In-memory store
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read and parse a stored value; missing or malformed values read as `None`
pub fn get_value<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[STORAGE] ignoring malformed value under {}: {}", key, e);
            None
        }
    }
}

pub fn set_value<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set_raw(key, &raw)
}

pub fn load_list_state(store: &impl KeyValueStore) -> Option<PersistedListState> {
    get_value(store, LIST_STATE_KEY)
}

/// Write the list state; failures are logged and otherwise ignored
pub fn save_list_state(store: &impl KeyValueStore, state: &PersistedListState) {
    if let Err(e) = set_value(store, LIST_STATE_KEY, state) {
        log::error!("[STORAGE] failed to save list state: {}", e);
    }
}
