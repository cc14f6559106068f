//! Platform-agnostic application bootstrap for the admin panel.
//!
//! Provides `AppState` (session container), `AppStateBuilder` (adapter
//! injection) and `AppConfig` (where and under which key accounts live).

pub mod adapters;
pub mod config;

use std::sync::Arc;

use admin_panel_core::error::{CoreError, CoreResult};
use admin_panel_core::services::{AccountsStore, StoreContext, ACCOUNTS_STORAGE_KEY};
use admin_panel_core::traits::KeyValueStore;

use adapters::JsonFileKeyValueStore;
pub use config::AppConfig;

/// Session application state.
///
/// Every frontend constructs this once per session via `AppStateBuilder`;
/// construction loads the stored accounts. There is no teardown.
pub struct AppState {
    /// Store context (holds the key/value adapter)
    pub ctx: Arc<StoreContext>,
    /// Account store
    pub accounts: AccountsStore,
}

impl AppState {
    /// Build a session backed by the JSON store file described by `config`.
    pub fn from_config(config: &AppConfig) -> CoreResult<Self> {
        if let Err(e) = config.validate() {
            e.log("Rejected configuration");
            return Err(e);
        }

        let store = JsonFileKeyValueStore::with_max_file_size(
            config.store_file_path(),
            config.max_store_file_size,
        );

        AppStateBuilder::new()
            .key_value_store(Arc::new(store))
            .storage_key(&config.storage_key)
            .build()
    }
}

/// Builder for constructing `AppState` with a platform-specific adapter.
///
/// # Required adapters
/// - `key_value_store` — where the account list is persisted
///
/// # Optional
/// - `storage_key` — defaults to `admin-panel-accounts`
pub struct AppStateBuilder {
    key_value_store: Option<Arc<dyn KeyValueStore>>,
    storage_key: Option<String>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_value_store: None,
            storage_key: None,
        }
    }

    #[must_use]
    pub fn key_value_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.key_value_store = Some(store);
        self
    }

    #[must_use]
    pub fn storage_key(mut self, key: &str) -> Self {
        self.storage_key = Some(key.to_string());
        self
    }

    /// Build the `AppState`, loading stored accounts.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the key/value store is missing.
    pub fn build(self) -> CoreResult<AppState> {
        let key_value_store = self.key_value_store.ok_or_else(|| {
            CoreError::ValidationError("key_value_store is required".to_string())
        })?;
        let storage_key = self
            .storage_key
            .unwrap_or_else(|| ACCOUNTS_STORAGE_KEY.to_string());

        let ctx = Arc::new(StoreContext::with_storage_key(
            key_value_store,
            &storage_key,
        ));
        let accounts = AccountsStore::new(Arc::clone(&ctx));

        log::info!(
            "Account store ready: {} account(s) under '{}'",
            accounts.accounts_count(),
            storage_key
        );

        Ok(AppState { ctx, accounts })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
