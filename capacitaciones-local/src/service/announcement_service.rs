use std::sync::Arc;

use uuid::Uuid;

use capacitaciones_api::domain::requests::AnnouncementDraft;
use capacitaciones_api::error::{ApiError, ApiResult};
use capacitaciones_db::models::announcement::AnnouncementModel;
use capacitaciones_db::repository::{Create, Delete, FindByKey, LoadAll, Update};

use crate::local_repositories::LocalRepositories;
use crate::service::{bounded, storage_err};

/// Announcement board shared by both dashboards
pub struct AnnouncementService {
    repos: Arc<LocalRepositories>,
}

impl AnnouncementService {
    pub fn new(repos: Arc<LocalRepositories>) -> Self {
        Self { repos }
    }

    pub async fn list_announcements(&self) -> ApiResult<Vec<AnnouncementModel>> {
        self.repos
            .announcement_repository
            .load_all()
            .await
            .map_err(storage_err)
    }

    /// A blank draft dated today, as the creation form opens
    pub fn new_draft(&self) -> AnnouncementDraft {
        AnnouncementDraft {
            titulo: String::new(),
            contenido: String::new(),
            fecha_publicacion: chrono::Local::now().date_naive(),
        }
    }

    pub async fn create_announcement(
        &self,
        draft: &AnnouncementDraft,
    ) -> ApiResult<AnnouncementModel> {
        draft.check()?;
        let announcement = AnnouncementModel {
            id: Uuid::new_v4(),
            titulo: bounded(draft.titulo.trim())?,
            contenido: draft.contenido.trim().to_string(),
            fecha_publicacion: draft.fecha_publicacion,
        };
        self.repos
            .announcement_repository
            .create(announcement)
            .await
            .map_err(storage_err)
    }

    pub async fn update_announcement(
        &self,
        id: Uuid,
        draft: &AnnouncementDraft,
    ) -> ApiResult<AnnouncementModel> {
        draft.check()?;

        let announcements = &self.repos.announcement_repository;
        let mut announcement = announcements
            .find_by_key(&id)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| ApiError::NotFound(format!("Anuncio con ID {id} no encontrado.")))?;

        announcement.titulo = bounded(draft.titulo.trim())?;
        announcement.contenido = draft.contenido.trim().to_string();
        announcement.fecha_publicacion = draft.fecha_publicacion;

        announcements
            .update(announcement.clone())
            .await
            .map_err(storage_err)?;
        Ok(announcement)
    }

    pub async fn delete_announcement(&self, id: Uuid) -> ApiResult<()> {
        let removed = self
            .repos
            .announcement_repository
            .delete(&id)
            .await
            .map_err(storage_err)?;
        if !removed {
            return Err(ApiError::NotFound(format!("Anuncio con ID {id} no encontrado.")));
        }
        Ok(())
    }
}
