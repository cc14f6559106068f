//! Test auxiliary module
//!
//! Provides mock implementations and convenient test factory methods.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{CoreError, CoreResult};
use crate::services::{AccountsStore, StoreContext, ACCOUNTS_STORAGE_KEY};
use crate::traits::KeyValueStore;
use crate::types::{parse_tags, AccountType, PersistedAccount};

// ===== MockKeyValueStore =====

pub struct MockKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    set_calls: AtomicUsize,
    /// If Some, `get` returns this error
    get_error: Mutex<Option<String>>,
    /// If Some, `set` returns this error (quota exceeded and the like)
    set_error: Mutex<Option<String>>,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            set_calls: AtomicUsize::new(0),
            get_error: Mutex::new(None),
            set_error: Mutex::new(None),
        }
    }

    pub fn with_accounts_json(json: &str) -> Self {
        let store = Self::new();
        store.put_raw(json);
        store
    }

    /// Write under the accounts key without counting it as a store write
    pub fn put_raw(&self, json: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(ACCOUNTS_STORAGE_KEY.to_string(), json.to_string());
    }

    pub fn raw(&self) -> Option<String> {
        self.entries.lock().unwrap().get(ACCOUNTS_STORAGE_KEY).cloned()
    }

    pub fn stored_accounts(&self) -> Vec<PersistedAccount> {
        serde_json::from_str(&self.raw().unwrap()).unwrap()
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    pub fn set_get_error(&self, err: Option<String>) {
        *self.get_error.lock().unwrap() = err;
    }

    pub fn set_set_error(&self, err: Option<String>) {
        *self.set_error.lock().unwrap() = err;
    }
}

impl KeyValueStore for MockKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        if let Some(ref msg) = *self.get_error.lock().unwrap() {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = *self.set_error.lock().unwrap() {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ===== Factories =====

pub fn create_test_store_with(kv: Arc<MockKeyValueStore>) -> AccountsStore {
    let ctx = Arc::new(StoreContext::new(kv));
    AccountsStore::new(ctx)
}

pub fn create_test_store() -> (AccountsStore, Arc<MockKeyValueStore>) {
    let kv = Arc::new(MockKeyValueStore::new());
    (create_test_store_with(Arc::clone(&kv)), kv)
}

pub fn saved_account(
    tags: &str,
    account_type: AccountType,
    login: &str,
    password: Option<&str>,
) -> PersistedAccount {
    PersistedAccount {
        tags: parse_tags(tags),
        account_type,
        login: login.to_string(),
        password: password.map(str::to_string),
    }
}

pub fn accounts_json(accounts: &[PersistedAccount]) -> String {
    serde_json::to_string(accounts).unwrap()
}
