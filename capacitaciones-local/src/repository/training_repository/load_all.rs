use async_trait::async_trait;
use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::repository::load_all::LoadAll;
use std::error::Error;

use super::repo_impl::TrainingRepositoryImpl;

#[async_trait]
impl LoadAll for TrainingRepositoryImpl {
    type Model = TrainingModel;

    async fn load_all(&self) -> Result<Vec<TrainingModel>, Box<dyn Error + Send + Sync>> {
        self.read_trainings().await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use capacitaciones_db::models::training::EnrollmentType;
    use capacitaciones_db::repository::{Create, LoadAll};

    use super::super::test_utils::test_utils::create_test_training;

    #[tokio::test]
    async fn test_load_all_trainings() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = &ctx.repos.training_repository;

        repo.create(create_test_training("Seguridad Informática", EnrollmentType::Libre))
            .await?;
        repo.create(create_test_training("Primeros Auxilios", EnrollmentType::Obligatoria))
            .await?;

        assert_eq!(repo.load_all().await?.len(), 2);
        Ok(())
    }
}
