pub mod config;
pub mod logging;
pub mod storage;

pub use config::{load_config, print_schema, Config, ConfigV1};
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};
