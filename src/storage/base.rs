use std::sync::Arc;

use tracing::{error, info};

use super::{file_storage::FileStorage, memory_storage::MemoryStorage};
use crate::config::{StorageBackend, StorageConfig};

/// The Storage trait abstracts the durable key-value slots the session layer
/// writes (get, set, remove).
///
/// All operations are synchronous: the session contract treats durable
/// reads/writes as immediate, and every key holds a single string value.
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, or None if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    /// Deletes the slot for `key`. Removing an empty slot is not an error.
    fn remove(&self, key: &str) -> Result<(), String>;
    fn is_persistent(&self) -> bool {
        // Default implementation should return always True for real backends.
        // The memory backend returns false so we can write better log messages.
        true
    }
}

/// Creates a concrete storage implementation based on the StorageConfig.
pub fn create_storage(config: &StorageConfig) -> Arc<dyn Storage> {
    match &config.backend {
        StorageBackend::File(file_config) => match FileStorage::new(file_config) {
            Ok(storage) => {
                info!("Successfully created file storage at '{}'.", file_config.path);
                Arc::new(storage)
            }
            Err(e) => {
                error!("Failed to create file storage: {}", e);
                std::process::exit(1);
            }
        },
        StorageBackend::Memory => {
            info!("Using in-memory storage. Sessions will not survive restarts.");
            Arc::new(MemoryStorage::new())
        }
    }
}
