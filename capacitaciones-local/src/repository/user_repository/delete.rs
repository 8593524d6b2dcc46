use async_trait::async_trait;
use capacitaciones_db::models::user::UserModel;
use capacitaciones_db::repository::delete::Delete;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl Delete for UserRepositoryImpl {
    type Model = UserModel;

    async fn delete(&self, cedula: &String) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut users = self.read_users().await?;
        let before = users.len();
        users.retain(|u| u.cedula.as_str() != cedula);
        if users.len() == before {
            return Ok(false);
        }
        self.write_users(&users).await?;
        Ok(true)
    }
}
