use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for key-existence checks
///
/// Used by uniqueness validation (cédula, email) and by the certificate
/// screen when deciding which trainings are still assignable.
#[async_trait]
pub trait ExistsByKey: Send + Sync {
    /// The entity type, which defines its own key
    type Model: Identifiable;

    /// Check whether any entity carries the key
    ///
    /// # Returns
    /// * `Ok(bool)` - Whether the key is present
    /// * `Err` - An error if the store could not be read
    async fn exists_by_key(
        &self,
        key: &<Self::Model as Identifiable>::Key,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
