use async_trait::async_trait;
use capacitaciones_db::models::user::UserModel;
use capacitaciones_db::repository::save_all::SaveAll;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl SaveAll for UserRepositoryImpl {
    type Model = UserModel;

    async fn save_all(&self, items: Vec<UserModel>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.write_users(&items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use capacitaciones_db::repository::{Create, LoadAll, SaveAll};

    use super::super::test_utils::test_utils::create_test_user;

    #[tokio::test]
    async fn test_save_all_replaces_the_registry(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = &ctx.repos.user_repository;

        repo.create(create_test_user("0911111111", "uno@uleam.edu.ec")).await?;
        repo.create(create_test_user("0922222222", "dos@uleam.edu.ec")).await?;

        let kept = vec![create_test_user("0933333333", "tres@uleam.edu.ec")];
        repo.save_all(kept).await?;

        let users = repo.load_all().await?;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].cedula.as_str(), "0933333333");
        Ok(())
    }
}
