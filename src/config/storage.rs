use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::storage::file_storage::FileStorageConfig;

/// A wrapper for the storage configuration; the backend variant is chosen
/// by the "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct StorageConfig {
    #[serde(flatten)]
    pub backend: StorageBackend,
}

/// The available storage backends.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
#[serde(tag = "type")]
pub enum StorageBackend {
    /// Durable, one file per key under a directory.
    #[serde(rename = "file")]
    File(FileStorageConfig),
    /// Process-lifetime only; sessions do not survive restarts.
    #[serde(rename = "memory")]
    Memory,
}
