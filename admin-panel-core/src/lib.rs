//! Admin Panel Core Library
//!
//! Provides the account management logic behind the admin panel:
//! - Account records in an edit shape and a storage shape
//! - Field validation (Validation)
//! - The session account store with write-through persistence (`AccountsStore`)
//!
//! This library is platform-independent; persistence goes through the
//! `KeyValueStore` trait, implemented by the embedding application.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{validate_account, AccountsStore, StoreContext, ACCOUNTS_STORAGE_KEY};
pub use traits::{InMemoryKeyValueStore, KeyValueStore};
