use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for replacing one entity in its collection
///
/// The record with the matching key is replaced wholesale and the full
/// collection re-persisted.
#[async_trait]
pub trait Update: Send + Sync {
    /// The entity type, which defines its own key
    type Model: Identifiable;

    /// Replace the stored entity carrying the same key
    ///
    /// # Returns
    /// * `Ok(Model)` - The updated entity
    /// * `Err` - An error if no record carries the key or the store could
    ///   not be written
    async fn update(
        &self,
        item: Self::Model,
    ) -> Result<Self::Model, Box<dyn std::error::Error + Send + Sync>>;
}
