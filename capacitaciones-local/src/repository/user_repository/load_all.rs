use async_trait::async_trait;
use capacitaciones_db::models::user::UserModel;
use capacitaciones_db::repository::load_all::LoadAll;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl LoadAll for UserRepositoryImpl {
    type Model = UserModel;

    async fn load_all(&self) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        self.read_users().await
    }
}
