use std::sync::Arc;

use uuid::Uuid;

use capacitaciones_api::domain::route::Route;
use capacitaciones_api::error::{ApiError, ApiResult};
use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::repository::{FindByKey, LoadAll};

use crate::config::PortalConfig;
use crate::local_repositories::LocalRepositories;
use crate::service::storage_err;

/// A catalog entry as the user dashboard renders it
///
/// Mandatory trainings are always enrolled; open trainings are enrolled
/// only when the voluntary index says so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingCard {
    pub training: TrainingModel,
    pub inscrito: bool,
}

/// One downloadable certificate as the certificates view renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateCard {
    pub training: TrainingModel,
    pub url: String,
    /// Issue date, or fallback text when the training never recorded one
    pub fecha_emision: String,
}

/// Shown when a certificate carries no issue date
pub const MISSING_DATE_TEXT: &str = "Fecha no disponible";

/// Catalog filters offered by the user dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentFilter {
    All,
    Enrolled,
    Mandatory,
    Optional,
}

/// User-facing view over the catalog and the voluntary enrollments
pub struct EnrollmentService {
    repos: Arc<LocalRepositories>,
    config: PortalConfig,
}

impl EnrollmentService {
    pub fn new(repos: Arc<LocalRepositories>, config: PortalConfig) -> Self {
        Self { repos, config }
    }

    /// The whole catalog annotated with the identity's enrollment state
    pub async fn catalog_for(&self, cedula: &str) -> ApiResult<Vec<TrainingCard>> {
        let trainings = self
            .repos
            .training_repository
            .load_all()
            .await
            .map_err(storage_err)?;
        let voluntary = self
            .repos
            .enrollment_repository
            .for_user(cedula)
            .await
            .map_err(storage_err)?;

        Ok(trainings
            .into_iter()
            .map(|training| {
                let inscrito =
                    training.tipo_inscripcion.is_mandatory() || voluntary.contains(&training.id);
                TrainingCard { training, inscrito }
            })
            .collect())
    }

    pub async fn catalog_filtered(
        &self,
        cedula: &str,
        filter: EnrollmentFilter,
    ) -> ApiResult<Vec<TrainingCard>> {
        let cards = self.catalog_for(cedula).await?;
        Ok(cards
            .into_iter()
            .filter(|card| match filter {
                EnrollmentFilter::All => true,
                EnrollmentFilter::Enrolled => card.inscrito,
                EnrollmentFilter::Mandatory => card.training.tipo_inscripcion.is_mandatory(),
                EnrollmentFilter::Optional => !card.training.tipo_inscripcion.is_mandatory(),
            })
            .collect())
    }

    /// Flip voluntary enrollment; returns `true` when enrolled after the
    /// call. Mandatory trainings cannot be toggled.
    pub async fn toggle_enrollment(&self, cedula: &str, id: Uuid) -> ApiResult<bool> {
        let training = self
            .repos
            .training_repository
            .find_by_key(&id)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| ApiError::NotFound(format!("Curso con ID {id} no encontrado.")))?;
        if training.tipo_inscripcion.is_mandatory() {
            return Err(ApiError::ValidationError(
                "No puedes cancelar la inscripción de una capacitación obligatoria.".to_string(),
            ));
        }
        self.repos
            .enrollment_repository
            .toggle(cedula, id)
            .await
            .map_err(storage_err)
    }

    /// One course as its detail page loads it
    pub async fn course_detail(&self, cedula: &str, id: Uuid) -> ApiResult<TrainingCard> {
        let training = self
            .repos
            .training_repository
            .find_by_key(&id)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| ApiError::NotFound(format!("Curso con ID {id} no encontrado.")))?;
        let inscrito = training.tipo_inscripcion.is_mandatory()
            || self
                .repos
                .enrollment_repository
                .is_enrolled(cedula, id)
                .await
                .map_err(storage_err)?;
        Ok(TrainingCard { training, inscrito })
    }

    /// Enrolled trainings whose certificate can be downloaded
    ///
    /// The URL is per training when set and falls back to the configured
    /// shared document; a missing issue date renders as fallback text.
    pub async fn certificates_for(&self, cedula: &str) -> ApiResult<Vec<CertificateCard>> {
        let cards = self.catalog_for(cedula).await?;
        Ok(cards
            .into_iter()
            .filter(|card| card.inscrito && card.training.certificate_available())
            .map(|card| {
                let url = card
                    .training
                    .url_certificado
                    .clone()
                    .unwrap_or_else(|| self.config.certificate_url.clone());
                let fecha_emision = card
                    .training
                    .fecha_emision_certificado
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| MISSING_DATE_TEXT.to_string());
                CertificateCard {
                    training: card.training,
                    url,
                    fecha_emision,
                }
            })
            .collect())
    }

    /// The route a catalog card navigates to; a card the identity is not
    /// enrolled in navigates nowhere
    pub fn course_route_for(&self, card: &TrainingCard) -> Option<Route> {
        card.inscrito.then_some(Route::Curso(card.training.id))
    }
}
