use async_trait::async_trait;
use capacitaciones_db::models::user::UserModel;
use capacitaciones_db::repository::find_by_key::FindByKey;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl FindByKey for UserRepositoryImpl {
    type Model = UserModel;

    async fn find_by_key(
        &self,
        cedula: &String,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .read_users()
            .await?
            .into_iter()
            .find(|u| u.cedula.as_str() == cedula))
    }
}
