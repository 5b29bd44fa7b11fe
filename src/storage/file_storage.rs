use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::storage::Storage;

/// The config struct for file-backed storage.
/// Contains the directory the key slots live in.
#[derive(Deserialize, Serialize, JsonSchema, Debug)]
pub struct FileStorageConfig {
    pub path: String,
}

/// A concrete `Storage` implementation backed by the local filesystem.
///
/// Each key occupies one file under the configured directory, holding the
/// raw string value. Slots written here survive process restarts, which is
/// what lets a session be restored after the shell is relaunched.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates a new `FileStorage` rooted at the configured directory,
    /// creating the directory if it does not exist yet.
    pub fn new(config: &FileStorageConfig) -> Result<Self, String> {
        let root = PathBuf::from(&config.path);
        fs::create_dir_all(&root)
            .map_err(|e| format!("Failed to create storage directory '{}': {}", config.path, e))?;
        info!("File storage ready at '{}'.", config.path);
        Ok(FileStorage { root })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("Failed to read storage key '{}': {}", key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        debug!("Writing storage key '{}'.", key);
        fs::write(self.slot_path(key), value)
            .map_err(|e| format!("Failed to write storage key '{}': {}", key, e))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        debug!("Removing storage key '{}'.", key);
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("Failed to remove storage key '{}': {}", key, e)),
        }
    }
}
