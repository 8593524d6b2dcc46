use async_trait::async_trait;
use capacitaciones_db::models::identifiable::Identifiable;
use capacitaciones_db::models::user::UserModel;
use capacitaciones_db::repository::update::Update;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl Update for UserRepositoryImpl {
    type Model = UserModel;

    async fn update(&self, item: UserModel) -> Result<UserModel, Box<dyn Error + Send + Sync>> {
        let mut users = self.read_users().await?;
        let key = item.key();
        match users.iter_mut().find(|u| u.key() == key) {
            Some(slot) => *slot = item.clone(),
            None => return Err(format!("no user with cedula {key}").into()),
        }
        self.write_users(&users).await?;
        Ok(item)
    }
}
