use async_trait::async_trait;
use capacitaciones_db::models::user::UserModel;
use capacitaciones_db::repository::exists_by_key::ExistsByKey;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl ExistsByKey for UserRepositoryImpl {
    type Model = UserModel;

    async fn exists_by_key(&self, cedula: &String) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Ok(self
            .read_users()
            .await?
            .iter()
            .any(|u| u.cedula.as_str() == cedula))
    }
}
