use serde::de::DeserializeOwned;
use serde::Serialize;

use capacitaciones_db::storage::KeyValueStore;

/// Reads a JSON array stored under `key`.
///
/// A missing key or a value that no longer parses yields an empty
/// collection so that a corrupted entry never locks users out of the
/// portal. The parse failure is logged and the bad payload is left in
/// place until the next save overwrites it.
pub async fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>> {
    match store.get(key).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed stored collection");
                Ok(Vec::new())
            }
        },
        None => Ok(Vec::new()),
    }
}

/// Serializes the collection and stores it under `key`, replacing any
/// previous value.
pub async fn write_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let raw = serde_json::to_string(items)?;
    store.put(key, raw).await
}

/// Reads a single JSON value under `key`, falling back to `T::default()`
/// when the key is absent or malformed.
pub async fn read_value<T: DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    match store.get(key).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed stored value");
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}

pub async fn write_value<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let raw = serde_json::to_string(value)?;
    store.put(key, raw).await
}
