use async_trait::async_trait;

/// Generic repository trait for re-persisting a whole entity collection
///
/// Matches the storage model of the legacy portal: a mutation always
/// serializes the full updated list back under its key, replacing the
/// previous value (last writer wins).
#[async_trait]
pub trait SaveAll: Send + Sync {
    /// The entity type of the collection
    type Model;

    /// Serialize and persist the given records as the new collection
    ///
    /// # Arguments
    /// * `items` - The complete replacement collection
    ///
    /// # Returns
    /// * `Ok(())` - The collection was persisted
    /// * `Err` - An error if the store could not be written
    async fn save_all(
        &self,
        items: Vec<Self::Model>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
