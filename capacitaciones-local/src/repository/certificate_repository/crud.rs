use async_trait::async_trait;
use capacitaciones_db::models::certificate::CertificateAssignmentModel;
use capacitaciones_db::repository::{Create, Delete, FindByKey, LoadAll, SaveAll};
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::CertificateRepositoryImpl;

#[async_trait]
impl LoadAll for CertificateRepositoryImpl {
    type Model = CertificateAssignmentModel;

    async fn load_all(
        &self,
    ) -> Result<Vec<CertificateAssignmentModel>, Box<dyn Error + Send + Sync>> {
        self.read_assignments().await
    }
}

#[async_trait]
impl SaveAll for CertificateRepositoryImpl {
    type Model = CertificateAssignmentModel;

    async fn save_all(
        &self,
        items: Vec<CertificateAssignmentModel>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.write_assignments(&items).await
    }
}

#[async_trait]
impl FindByKey for CertificateRepositoryImpl {
    type Model = CertificateAssignmentModel;

    async fn find_by_key(
        &self,
        id: &Uuid,
    ) -> Result<Option<CertificateAssignmentModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .read_assignments()
            .await?
            .into_iter()
            .find(|a| a.id == *id))
    }
}

#[async_trait]
impl Create for CertificateRepositoryImpl {
    type Model = CertificateAssignmentModel;

    async fn create(
        &self,
        item: CertificateAssignmentModel,
    ) -> Result<CertificateAssignmentModel, Box<dyn Error + Send + Sync>> {
        let mut assignments = self.read_assignments().await?;
        assignments.push(item.clone());
        self.write_assignments(&assignments).await?;
        Ok(item)
    }
}

#[async_trait]
impl Delete for CertificateRepositoryImpl {
    type Model = CertificateAssignmentModel;

    async fn delete(&self, id: &Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut assignments = self.read_assignments().await?;
        let before = assignments.len();
        assignments.retain(|a| a.id != *id);
        if assignments.len() == before {
            return Ok(false);
        }
        self.write_assignments(&assignments).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use capacitaciones_db::models::certificate::CertificateAssignmentModel;
    use capacitaciones_db::repository::{Create, Delete, LoadAll};
    use chrono::NaiveDate;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    fn create_test_assignment(id_capacitacion: Uuid) -> CertificateAssignmentModel {
        CertificateAssignmentModel {
            id: Uuid::new_v4(),
            id_capacitacion,
            titulo_capacitacion: HeaplessString::try_from("Seguridad Informática").unwrap(),
            fecha_asignacion: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            url_certificado_asociado: "/pdf/Certificado.pdf".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_by_training() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = &ctx.repos.certificate_repository;

        let training_id = Uuid::new_v4();
        let created = repo.create(create_test_assignment(training_id)).await?;

        let found = repo.find_by_training(&training_id).await?;
        assert_eq!(found.map(|a| a.id), Some(created.id));
        assert!(repo.find_by_training(&Uuid::new_v4()).await?.is_none());

        assert!(repo.delete(&created.id).await?);
        assert!(repo.load_all().await?.is_empty());
        Ok(())
    }
}
