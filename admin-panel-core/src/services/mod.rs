//! Business logic service layer

mod accounts_store;
mod validation;

pub use accounts_store::AccountsStore;
pub use validation::{
    validate_account, LOGIN_REQUIRED, LOGIN_TOO_LONG, MAX_LOGIN_LENGTH, MAX_PASSWORD_LENGTH,
    MAX_TAGS_LENGTH, PASSWORD_REQUIRED, PASSWORD_TOO_LONG, TAGS_TOO_LONG,
};

use std::sync::Arc;

use crate::traits::KeyValueStore;

/// Fixed key the account list is stored under
pub const ACCOUNTS_STORAGE_KEY: &str = "admin-panel-accounts";

/// Store context - holds the session's dependencies
///
/// The platform layer creates this once per session and injects its
/// key/value store implementation.
pub struct StoreContext {
    /// Key/value persistence
    key_value_store: Arc<dyn KeyValueStore>,
    /// Key the account list lives under
    storage_key: String,
}

impl StoreContext {
    /// Create a context using the default storage key
    #[must_use]
    pub fn new(key_value_store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_storage_key(key_value_store, ACCOUNTS_STORAGE_KEY)
    }

    /// Create a context with a custom storage key
    #[must_use]
    pub fn with_storage_key(key_value_store: Arc<dyn KeyValueStore>, storage_key: &str) -> Self {
        Self {
            key_value_store,
            storage_key: storage_key.to_string(),
        }
    }

    #[must_use]
    pub fn key_value_store(&self) -> &Arc<dyn KeyValueStore> {
        &self.key_value_store
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}
