use async_trait::async_trait;
use capacitaciones_db::models::user::UserModel;
use capacitaciones_db::repository::create::Create;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl Create for UserRepositoryImpl {
    type Model = UserModel;

    async fn create(&self, item: UserModel) -> Result<UserModel, Box<dyn Error + Send + Sync>> {
        let mut users = self.read_users().await?;
        users.push(item.clone());
        self.write_users(&users).await?;
        Ok(item)
    }
}
