use async_trait::async_trait;
use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::repository::save_all::SaveAll;
use std::error::Error;

use super::repo_impl::TrainingRepositoryImpl;

#[async_trait]
impl SaveAll for TrainingRepositoryImpl {
    type Model = TrainingModel;

    async fn save_all(
        &self,
        items: Vec<TrainingModel>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.write_trainings(&items).await
    }
}
