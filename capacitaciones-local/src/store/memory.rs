use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use capacitaciones_db::storage::KeyValueStore;

/// In-memory key-value store
///
/// Backs tests and ephemeral sessions; same unguarded last-writer-wins
/// semantics as the file-backed store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn put(
        &self,
        key: &str,
        value: String,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.entries.write().remove(key);
        Ok(())
    }
}
