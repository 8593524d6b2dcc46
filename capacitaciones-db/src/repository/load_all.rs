use async_trait::async_trait;

/// Generic repository trait for loading a whole entity collection
///
/// The persisted serialized form is the sole source of truth, so every
/// screen starts from a fresh `load_all` rather than from cached state.
/// A malformed or absent persisted collection is reported as empty, never
/// as an error.
///
/// # Example
/// ```ignore
/// impl LoadAll for TrainingRepositoryImpl<S> {
///     type Model = TrainingModel;
///     async fn load_all(&self) -> Result<Vec<TrainingModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait LoadAll: Send + Sync {
    /// The entity type of the collection
    type Model;

    /// Load every record of the collection
    ///
    /// # Returns
    /// * `Ok(Vec<Model>)` - All records, possibly empty
    /// * `Err` - An error if the store could not be read
    async fn load_all(&self)
        -> Result<Vec<Self::Model>, Box<dyn std::error::Error + Send + Sync>>;
}
