pub mod keys;

pub use keys::*;

use async_trait::async_trait;

/// Abstraction over the browser-style key-value storage
///
/// Values are opaque strings (usually JSON-encoded collections). The
/// store is the sole source of truth: repositories re-read on every
/// operation and never cache. Access is unguarded; two handles writing
/// the same key race and the last writer wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under a key, `None` when absent
    async fn get(&self, key: &str)
        -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Write the raw value under a key, replacing any previous value
    async fn put(
        &self,
        key: &str,
        value: String,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
