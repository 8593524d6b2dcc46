use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use capacitaciones_db::storage::KeyValueStore;

#[derive(Error, Debug)]
pub enum JsonFileStoreError {
    #[error("store file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not a valid key map: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// File-backed key-value store
///
/// Persists one JSON object mapping key names to their raw string values,
/// playing the role the browser's local storage plays for the legacy
/// portal. Every operation is a full read-modify-write of the file; two
/// processes sharing the file race exactly like two browser tabs, and the
/// last writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>, JsonFileStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_map(
        &self,
        map: &BTreeMap<String, String>,
    ) -> Result<(), JsonFileStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(map)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn put(
        &self,
        key: &str,
        value: String,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value);
        Ok(self.write_map(&map).await?)
    }

    async fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}
