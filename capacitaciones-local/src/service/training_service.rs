use std::str::FromStr;
use std::sync::Arc;

use uuid::Uuid;

use capacitaciones_api::domain::requests::TrainingDraft;
use capacitaciones_api::error::{ApiError, ApiResult};
use capacitaciones_db::models::training::{EnrollmentType, TrainingModel};
use capacitaciones_db::repository::{Create, Delete, FindByKey, LoadAll};
use capacitaciones_db::repository::Update;

use crate::local_repositories::LocalRepositories;
use crate::service::{bounded, storage_err};

/// Placeholder body for a training created with an empty content field
pub const DEFAULT_CONTENT: &str =
    "<p>Aquí puedes añadir el temario, enlaces a videos, tareas, etc.</p>";

/// Administrator view over the training catalog
pub struct TrainingService {
    repos: Arc<LocalRepositories>,
}

impl TrainingService {
    pub fn new(repos: Arc<LocalRepositories>) -> Self {
        Self { repos }
    }

    pub async fn list_trainings(&self) -> ApiResult<Vec<TrainingModel>> {
        self.repos
            .training_repository
            .load_all()
            .await
            .map_err(storage_err)
    }

    /// Create a catalog entry from a draft
    ///
    /// New entries always start without completion or certificate marks;
    /// an unrecognized enrollment type falls back to open enrollment.
    pub async fn create_training(&self, draft: &TrainingDraft) -> ApiResult<TrainingModel> {
        draft.check()?;

        let training = TrainingModel {
            id: Uuid::new_v4(),
            titulo: bounded(draft.titulo.trim())?,
            descripcion_corta: draft.descripcion_corta.trim().to_string(),
            duracion: bounded(draft.duracion.trim())?,
            tipo_inscripcion: EnrollmentType::from_str(&draft.tipo_inscripcion)
                .unwrap_or_default(),
            fecha_inicio: draft.fecha_inicio,
            fecha_fin: draft.fecha_fin,
            contenido_completo: content_or_default(&draft.contenido_completo),
            completado: false,
            certificado_emitido: false,
            url_certificado: None,
            fecha_emision_certificado: None,
        };

        self.repos
            .training_repository
            .create(training)
            .await
            .map_err(storage_err)
    }

    /// Replace the editable fields of an entry
    ///
    /// Completion and certificate marks are owned by the certificate
    /// flow and survive edits untouched.
    pub async fn update_training(
        &self,
        id: Uuid,
        draft: &TrainingDraft,
    ) -> ApiResult<TrainingModel> {
        draft.check()?;

        let trainings = &self.repos.training_repository;
        let mut training = trainings
            .find_by_key(&id)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| ApiError::NotFound(format!("Curso con ID {id} no encontrado.")))?;

        training.titulo = bounded(draft.titulo.trim())?;
        training.descripcion_corta = draft.descripcion_corta.trim().to_string();
        training.duracion = bounded(draft.duracion.trim())?;
        training.tipo_inscripcion =
            EnrollmentType::from_str(&draft.tipo_inscripcion).unwrap_or_default();
        training.fecha_inicio = draft.fecha_inicio;
        training.fecha_fin = draft.fecha_fin;
        training.contenido_completo = content_or_default(&draft.contenido_completo);

        trainings.update(training.clone()).await.map_err(storage_err)?;
        Ok(training)
    }

    pub async fn delete_training(&self, id: Uuid) -> ApiResult<()> {
        let removed = self
            .repos
            .training_repository
            .delete(&id)
            .await
            .map_err(storage_err)?;
        if !removed {
            return Err(ApiError::NotFound(format!("Curso con ID {id} no encontrado.")));
        }
        tracing::info!(%id, "training removed");
        Ok(())
    }
}

fn content_or_default(contenido: &str) -> String {
    let trimmed = contenido.trim();
    if trimmed.is_empty() {
        DEFAULT_CONTENT.to_string()
    } else {
        trimmed.to_string()
    }
}
