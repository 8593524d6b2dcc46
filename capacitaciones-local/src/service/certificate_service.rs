use std::sync::Arc;

use heapless::String as HeaplessString;
use uuid::Uuid;

use capacitaciones_api::domain::requests::CertificateAssignmentRequest;
use capacitaciones_api::error::{ApiError, ApiResult};
use capacitaciones_db::models::certificate::CertificateAssignmentModel;
use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::repository::{Create, Delete, FindByKey, LoadAll, Update};

use crate::config::PortalConfig;
use crate::local_repositories::LocalRepositories;
use crate::service::storage_err;

/// Certificate assignment over the training catalog
///
/// Assigning touches two collections: the assignment ledger gains an
/// entry and the training record is marked completed with the
/// certificate fields set. The two writes are independent; a failure
/// between them leaves the collections out of step until the next
/// assignment or unassignment of the same training.
pub struct CertificateService {
    repos: Arc<LocalRepositories>,
    config: PortalConfig,
}

impl CertificateService {
    pub fn new(repos: Arc<LocalRepositories>, config: PortalConfig) -> Self {
        Self { repos, config }
    }

    pub async fn list_assignments(&self) -> ApiResult<Vec<CertificateAssignmentModel>> {
        self.repos
            .certificate_repository
            .load_all()
            .await
            .map_err(storage_err)
    }

    /// Trainings that can still receive a certificate
    pub async fn assignable_trainings(&self) -> ApiResult<Vec<TrainingModel>> {
        let assigned: Vec<Uuid> = self
            .list_assignments()
            .await?
            .into_iter()
            .map(|a| a.id_capacitacion)
            .collect();
        let trainings = self
            .repos
            .training_repository
            .load_all()
            .await
            .map_err(storage_err)?;
        Ok(trainings
            .into_iter()
            .filter(|t| !assigned.contains(&t.id))
            .collect())
    }

    /// Attach the certificate document to a training
    ///
    /// At most one assignment per training; the training is marked
    /// completed and carries the certificate URL afterwards.
    pub async fn assign(
        &self,
        request: &CertificateAssignmentRequest,
    ) -> ApiResult<CertificateAssignmentModel> {
        let certificates = &self.repos.certificate_repository;
        if certificates
            .find_by_training(&request.id_capacitacion)
            .await
            .map_err(storage_err)?
            .is_some()
        {
            return Err(ApiError::ValidationError(
                "Esta capacitación ya tiene un certificado asignado.".to_string(),
            ));
        }

        let trainings = &self.repos.training_repository;
        let mut training = trainings
            .find_by_key(&request.id_capacitacion)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "Curso con ID {} no encontrado.",
                    request.id_capacitacion
                ))
            })?;

        let assignment = CertificateAssignmentModel {
            id: Uuid::new_v4(),
            id_capacitacion: training.id,
            titulo_capacitacion: HeaplessString::try_from(training.titulo.as_str())
                .map_err(|_| ApiError::InternalError("Título demasiado largo.".to_string()))?,
            fecha_asignacion: request.fecha_asignacion,
            url_certificado_asociado: self.config.certificate_url.clone(),
        };
        certificates
            .create(assignment.clone())
            .await
            .map_err(storage_err)?;

        training.completado = true;
        training.certificado_emitido = true;
        training.url_certificado = Some(self.config.certificate_url.clone());
        training.fecha_emision_certificado = Some(request.fecha_asignacion);
        trainings.update(training).await.map_err(storage_err)?;

        tracing::info!(id_capacitacion = %request.id_capacitacion, "certificate assigned");
        Ok(assignment)
    }

    /// Detach a certificate, reopening the training for assignment
    pub async fn unassign(&self, assignment_id: Uuid) -> ApiResult<()> {
        let certificates = &self.repos.certificate_repository;
        let assignment = certificates
            .find_by_key(&assignment_id)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| ApiError::NotFound("Asignación no encontrada.".to_string()))?;

        certificates
            .delete(&assignment_id)
            .await
            .map_err(storage_err)?;

        // The training may have been deleted after the assignment; the
        // ledger entry still goes away.
        let trainings = &self.repos.training_repository;
        if let Some(mut training) = trainings
            .find_by_key(&assignment.id_capacitacion)
            .await
            .map_err(storage_err)?
        {
            training.completado = false;
            training.certificado_emitido = false;
            training.url_certificado = None;
            training.fecha_emision_certificado = None;
            trainings.update(training).await.map_err(storage_err)?;
        }

        tracing::info!(id_capacitacion = %assignment.id_capacitacion, "certificate unassigned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use capacitaciones_api::domain::requests::{CertificateAssignmentRequest, TrainingDraft};
    use capacitaciones_api::error::ApiError;
    use capacitaciones_db::repository::{Delete, FindByKey};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn draft(titulo: &str) -> TrainingDraft {
        TrainingDraft {
            titulo: titulo.to_string(),
            descripcion_corta: "Curso para el personal.".to_string(),
            duracion: "20 horas".to_string(),
            tipo_inscripcion: "Libre".to_string(),
            fecha_inicio: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2025, 4, 25).unwrap(),
            contenido_completo: "<p>Temario</p>".to_string(),
        }
    }

    fn assignment_for(id: Uuid) -> CertificateAssignmentRequest {
        CertificateAssignmentRequest {
            id_capacitacion: id,
            fecha_asignacion: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_assign_marks_the_training(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let training = ctx
            .training_service
            .create_training(&draft("Seguridad Informática"))
            .await?;

        let assignment = ctx
            .certificate_service
            .assign(&assignment_for(training.id))
            .await?;
        assert_eq!(assignment.url_certificado_asociado, "/pdf/Certificado.pdf");
        assert_eq!(assignment.titulo_capacitacion.as_str(), "Seguridad Informática");

        let stored = ctx
            .repos
            .training_repository
            .find_by_key(&training.id)
            .await?
            .unwrap();
        assert!(stored.certificate_available());
        assert_eq!(
            stored.fecha_emision_certificado,
            Some(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_one_assignment_per_training(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let training = ctx
            .training_service
            .create_training(&draft("Primeros Auxilios"))
            .await?;

        ctx.certificate_service
            .assign(&assignment_for(training.id))
            .await?;
        let second = ctx
            .certificate_service
            .assign(&assignment_for(training.id))
            .await;
        match second {
            Err(ApiError::ValidationError(msg)) => {
                assert_eq!(msg, "Esta capacitación ya tiene un certificado asignado.")
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }

        // After assignment the training leaves the assignable list.
        assert!(ctx.certificate_service.assignable_trainings().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_unassign_reopens_the_training(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let training = ctx
            .training_service
            .create_training(&draft("Redes Avanzadas"))
            .await?;
        let assignment = ctx
            .certificate_service
            .assign(&assignment_for(training.id))
            .await?;

        ctx.certificate_service.unassign(assignment.id).await?;

        let stored = ctx
            .repos
            .training_repository
            .find_by_key(&training.id)
            .await?
            .unwrap();
        assert!(!stored.completado);
        assert!(stored.url_certificado.is_none());
        assert_eq!(ctx.certificate_service.assignable_trainings().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_unassign_survives_a_deleted_training(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let training = ctx
            .training_service
            .create_training(&draft("Ofimática"))
            .await?;
        let assignment = ctx
            .certificate_service
            .assign(&assignment_for(training.id))
            .await?;

        ctx.repos.training_repository.delete(&training.id).await?;
        ctx.certificate_service.unassign(assignment.id).await?;
        assert!(ctx.certificate_service.list_assignments().await?.is_empty());

        let missing = ctx.certificate_service.unassign(assignment.id).await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));
        Ok(())
    }
}
