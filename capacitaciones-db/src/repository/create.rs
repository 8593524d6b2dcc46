use async_trait::async_trait;

/// Generic repository trait for appending one entity to its collection
///
/// Uniqueness rules (cédula, email, one assignment per training) are
/// enforced by the service layer before the append; the repository only
/// re-persists the grown collection.
#[async_trait]
pub trait Create: Send + Sync {
    /// The entity type of the collection
    type Model;

    /// Append an entity and re-persist the collection
    ///
    /// # Returns
    /// * `Ok(Model)` - The created entity
    /// * `Err` - An error if the store could not be written
    async fn create(
        &self,
        item: Self::Model,
    ) -> Result<Self::Model, Box<dyn std::error::Error + Send + Sync>>;
}
