//! JSON file-based key/value store
//!
//! Keeps the whole key/value map in one JSON object on disk, so values
//! survive between sessions the way browser local storage does.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use admin_panel_core::error::{CoreError, CoreResult};
use admin_panel_core::traits::KeyValueStore;

pub const DEFAULT_MAX_STORE_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Key/value store persisted to a single JSON file.
///
/// The file is read lazily on first access and cached. Every `set` rewrites
/// the file; the cache only changes once the write succeeded.
pub struct JsonFileKeyValueStore {
    /// Path to the store file.
    path: PathBuf,
    /// Files larger than this are refused.
    max_file_size: u64,
    /// In-memory cache.
    cache: RwLock<Option<HashMap<String, String>>>,
}

impl JsonFileKeyValueStore {
    /// Create a store backed by `path` with the default size limit.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_max_file_size(path, DEFAULT_MAX_STORE_FILE_SIZE)
    }

    #[must_use]
    pub fn with_max_file_size(path: impl Into<PathBuf>, max_file_size: u64) -> Self {
        let path = path.into();
        log::debug!("Key/value store file: {}", path.display());
        Self {
            path,
            max_file_size,
            cache: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the entry map from the store file.
    fn load_from_file(&self) -> CoreResult<HashMap<String, String>> {
        if !self.path.exists() {
            log::debug!("Store file does not exist: {}", self.path.display());
            return Ok(HashMap::new());
        }

        // Check file size before reading
        let metadata = fs::metadata(&self.path)
            .map_err(|e| CoreError::StorageError(format!("Failed to read store file metadata: {e}")))?;

        if metadata.len() > self.max_file_size {
            return Err(CoreError::StorageError(format!(
                "Store file too large: {} bytes (max: {} bytes)",
                metadata.len(),
                self.max_file_size
            )));
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| CoreError::StorageError(format!("Failed to read store file: {e}")))?;

        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(format!("Invalid store format: {e}")))
    }

    /// Write the entry map to the store file.
    ///
    /// Nothing is written when the serialized map exceeds the size limit.
    fn save_to_file(&self, entries: &HashMap<String, String>) -> CoreResult<()> {
        let content = serde_json::to_string_pretty(entries)?;

        // Refuse what `load_from_file` would refuse on the next session
        if content.len() as u64 > self.max_file_size {
            return Err(CoreError::StorageError(format!(
                "Store quota exceeded: {} bytes (max: {} bytes)",
                content.len(),
                self.max_file_size
            )));
        }

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    CoreError::StorageError(format!("Failed to create store directory: {e}"))
                })?;
            }
        }

        fs::write(&self.path, content)
            .map_err(|e| CoreError::StorageError(format!("Failed to write store file: {e}")))
    }
}

fn poisoned<T>(_: T) -> CoreError {
    CoreError::StorageError("Store cache lock poisoned".to_string())
}

impl KeyValueStore for JsonFileKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        // Check cache first (read lock)
        {
            let cache = self.cache.read().map_err(poisoned)?;
            if let Some(ref entries) = *cache {
                return Ok(entries.get(key).cloned());
            }
        }

        // Cache empty, acquire write lock and load (double-check)
        let mut cache = self.cache.write().map_err(poisoned)?;
        if let Some(ref entries) = *cache {
            return Ok(entries.get(key).cloned());
        }

        let entries = self.load_from_file()?;
        let value = entries.get(key).cloned();
        *cache = Some(entries);
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut cache = self.cache.write().map_err(poisoned)?;

        let mut entries = match *cache {
            Some(ref entries) => entries.clone(),
            None => self.load_from_file()?,
        };
        entries.insert(key.to_string(), value.to_string());

        self.save_to_file(&entries)?;
        *cache = Some(entries);
        Ok(())
    }
}
