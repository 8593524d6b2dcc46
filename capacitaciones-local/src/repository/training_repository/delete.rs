use async_trait::async_trait;
use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::repository::delete::Delete;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::TrainingRepositoryImpl;

#[async_trait]
impl Delete for TrainingRepositoryImpl {
    type Model = TrainingModel;

    async fn delete(&self, id: &Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut trainings = self.read_trainings().await?;
        let before = trainings.len();
        trainings.retain(|t| t.id != *id);
        if trainings.len() == before {
            return Ok(false);
        }
        self.write_trainings(&trainings).await?;
        Ok(true)
    }
}
