use async_trait::async_trait;
use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::repository::create::Create;
use std::error::Error;

use super::repo_impl::TrainingRepositoryImpl;

#[async_trait]
impl Create for TrainingRepositoryImpl {
    type Model = TrainingModel;

    async fn create(
        &self,
        item: TrainingModel,
    ) -> Result<TrainingModel, Box<dyn Error + Send + Sync>> {
        let mut trainings = self.read_trainings().await?;
        trainings.push(item.clone());
        self.write_trainings(&trainings).await?;
        Ok(item)
    }
}
