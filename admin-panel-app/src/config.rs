//! Application configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use admin_panel_core::error::{CoreError, CoreResult};
use admin_panel_core::ACCOUNTS_STORAGE_KEY;

use crate::adapters::DEFAULT_MAX_STORE_FILE_SIZE;

const APP_DIR_NAME: &str = "admin-panel";
const DEFAULT_STORE_FILE: &str = "storage.json";

/// Application configuration
///
/// Every field is optional in the config file; missing ones take defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory holding the store file
    pub data_dir: PathBuf,
    /// Store file name inside `data_dir`
    pub store_file: String,
    /// Key the account list is stored under
    pub storage_key: String,
    /// Upper bound for the store file, in bytes
    pub max_store_file_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store_file: DEFAULT_STORE_FILE.to_string(),
            storage_key: ACCOUNTS_STORAGE_KEY.to_string(),
            max_store_file_size: DEFAULT_MAX_STORE_FILE_SIZE,
        }
    }
}

/// Platform data directory, falling back to the working directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

impl AppConfig {
    /// Load configuration from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CoreError::ConfigError(format!("Failed to read config file: {e}")))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Invalid config file: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "storageKey cannot be empty".to_string(),
            ));
        }
        if self.store_file.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "storeFile cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Full path to the store file
    #[must_use]
    pub fn store_file_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }
}
