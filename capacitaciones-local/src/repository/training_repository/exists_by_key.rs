use async_trait::async_trait;
use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::repository::exists_by_key::ExistsByKey;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::TrainingRepositoryImpl;

#[async_trait]
impl ExistsByKey for TrainingRepositoryImpl {
    type Model = TrainingModel;

    async fn exists_by_key(&self, id: &Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Ok(self.read_trainings().await?.iter().any(|t| t.id == *id))
    }
}
