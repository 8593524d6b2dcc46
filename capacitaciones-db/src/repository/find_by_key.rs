use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding one entity by its key
///
/// Returns an `Option` to handle lookup misses; an unresolvable key is a
/// normal outcome (surfaced to the user as a not-found message), not an
/// error.
///
/// # Example
/// ```ignore
/// impl FindByKey for UserRepositoryImpl<S> {
///     type Model = UserModel;
///     async fn find_by_key(&self, cedula: &String) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindByKey: Send + Sync {
    /// The entity type, which defines its own key
    type Model: Identifiable;

    /// Find an entity by its unique key
    ///
    /// # Returns
    /// * `Ok(Some(Model))` - The found entity
    /// * `Ok(None)` - If no entity carries the key
    /// * `Err` - An error if the store could not be read
    async fn find_by_key(
        &self,
        key: &<Self::Model as Identifiable>::Key,
    ) -> Result<Option<Self::Model>, Box<dyn std::error::Error + Send + Sync>>;
}
