//! Platform-agnostic storage adapters for desktop and CLI hosts.

mod json_file_store;

pub use json_file_store::{JsonFileKeyValueStore, DEFAULT_MAX_STORE_FILE_SIZE};
