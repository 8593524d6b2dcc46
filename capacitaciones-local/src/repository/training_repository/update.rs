use async_trait::async_trait;
use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::repository::update::Update;
use std::error::Error;

use super::repo_impl::TrainingRepositoryImpl;

#[async_trait]
impl Update for TrainingRepositoryImpl {
    type Model = TrainingModel;

    async fn update(
        &self,
        item: TrainingModel,
    ) -> Result<TrainingModel, Box<dyn Error + Send + Sync>> {
        let mut trainings = self.read_trainings().await?;
        match trainings.iter_mut().find(|t| t.id == item.id) {
            Some(slot) => *slot = item.clone(),
            None => return Err(format!("no training with id {}", item.id).into()),
        }
        self.write_trainings(&trainings).await?;
        Ok(item)
    }
}
