use std::error::Error;
use std::sync::Arc;

use capacitaciones_db::models::user::UserModel;
use capacitaciones_db::storage::{keys, KeyValueStore};

use crate::store::collection::{read_collection, write_collection};

/// Registry of portal accounts persisted under the `users` key
///
/// The serialized array is the sole source of truth; every operation
/// reads the full registry, works on it in memory and writes the full
/// registry back.
pub struct UserRepositoryImpl {
    pub store: Arc<dyn KeyValueStore>,
}

impl UserRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub(super) async fn read_users(
        &self,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        read_collection(self.store.as_ref(), keys::USERS).await
    }

    pub(super) async fn write_users(
        &self,
        users: &[UserModel],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        write_collection(self.store.as_ref(), keys::USERS, users).await
    }

    /// Find an account by email, compared case-insensitively
    pub async fn find_by_email(
        &self,
        correo: &str,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let needle = correo.trim().to_lowercase();
        Ok(self
            .read_users()
            .await?
            .into_iter()
            .find(|u| u.correo.to_lowercase() == needle))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use capacitaciones_db::repository::Create;

    use super::super::test_utils::test_utils::create_test_user;

    #[tokio::test]
    async fn test_find_by_email_ignores_case(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = &ctx.repos.user_repository;

        repo.create(create_test_user("0912345678", "maria.soledad@uleam.edu.ec"))
            .await?;

        let found = repo.find_by_email("Maria.Soledad@ULEAM.edu.ec").await?;
        assert_eq!(found.map(|u| u.cedula.to_string()), Some("0912345678".to_string()));

        assert!(repo.find_by_email("nadie@uleam.edu.ec").await?.is_none());
        Ok(())
    }
}
