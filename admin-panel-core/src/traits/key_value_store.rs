//! Key/value persistence abstract Trait

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{CoreError, CoreResult};

/// Key/Value Store Trait
///
/// An opaque string store with `get`/`set`, the same contract a browser
/// local storage offers. Calls are synchronous and run to completion.
///
/// Platform implementation:
/// - In-process: `InMemoryKeyValueStore`
/// - Desktop/CLI: `JsonFileKeyValueStore` (admin-panel-app)
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// * `Ok(Some(value))` - key exists
    /// * `Ok(None)` - key does not exist
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Arguments
    /// * `key` - storage key
    /// * `value` - serialized value
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// In-memory key/value store
///
/// Default implementation, available on all platforms. Clones share data.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store pre-filled with one entry
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

fn poisoned<T>(_: T) -> CoreError {
    CoreError::StorageError("key/value store lock poisoned".to_string())
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
