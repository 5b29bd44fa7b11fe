use std::collections::HashMap;

use parking_lot::Mutex;

use super::Storage;

/// An in-memory storage backend.
///
/// Nothing written here outlives the process, so a restored session always
/// starts empty. Used by tests and by deployments that explicitly opt out
/// of durability.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.slots.lock().remove(key);
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that set/get/remove behave like the durable backend.
    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("current_user").unwrap(), None);

        storage.set("current_user", "value").unwrap();
        assert_eq!(storage.get("current_user").unwrap().as_deref(), Some("value"));

        storage.set("current_user", "newer").unwrap();
        assert_eq!(storage.get("current_user").unwrap().as_deref(), Some("newer"));

        storage.remove("current_user").unwrap();
        assert_eq!(storage.get("current_user").unwrap(), None);
    }

    /// Test that the memory backend reports itself as non-persistent.
    #[test]
    fn test_memory_storage_is_not_persistent() {
        assert!(!MemoryStorage::new().is_persistent());
    }
}
