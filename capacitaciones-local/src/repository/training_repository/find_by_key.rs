use async_trait::async_trait;
use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::repository::find_by_key::FindByKey;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::TrainingRepositoryImpl;

#[async_trait]
impl FindByKey for TrainingRepositoryImpl {
    type Model = TrainingModel;

    async fn find_by_key(
        &self,
        id: &Uuid,
    ) -> Result<Option<TrainingModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.read_trainings().await?.into_iter().find(|t| t.id == *id))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use capacitaciones_db::models::training::EnrollmentType;
    use capacitaciones_db::repository::{Create, FindByKey};
    use uuid::Uuid;

    use super::super::test_utils::test_utils::create_test_training;

    #[tokio::test]
    async fn test_find_training_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = &ctx.repos.training_repository;

        let created = repo
            .create(create_test_training("Redes Avanzadas", EnrollmentType::Libre))
            .await?;

        let found = repo.find_by_key(&created.id).await?;
        assert_eq!(found.map(|t| t.titulo), Some(created.titulo));

        assert!(repo.find_by_key(&Uuid::new_v4()).await?.is_none());
        Ok(())
    }
}
