use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for deleting one entity by its key
///
/// Deletion filters the record out of the collection and re-persists the
/// remainder, mirroring the filter-and-save pattern of the legacy
/// screens.
#[async_trait]
pub trait Delete: Send + Sync {
    /// The entity type, which defines its own key
    type Model: Identifiable;

    /// Remove the entity carrying the key, if any
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed
    /// * `Ok(false)` - No record carried the key
    /// * `Err` - An error if the store could not be written
    async fn delete(
        &self,
        key: &<Self::Model as Identifiable>::Key,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
