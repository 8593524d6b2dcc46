use std::str::FromStr;
use std::sync::Arc;

use capacitaciones_api::domain::requests::UserUpdateRequest;
use capacitaciones_api::domain::session::UserRole;
use capacitaciones_api::error::{ApiError, ApiResult};
use capacitaciones_db::models::user::{UserModel, WorkArea};
use capacitaciones_db::repository::{Delete, FindByKey, LoadAll, Update};

use crate::local_repositories::LocalRepositories;
use crate::service::{bounded, storage_err};

/// Administrator view over the account registry
pub struct UserAdminService {
    repos: Arc<LocalRepositories>,
}

impl UserAdminService {
    pub fn new(repos: Arc<LocalRepositories>) -> Self {
        Self { repos }
    }

    pub async fn list_users(&self) -> ApiResult<Vec<UserModel>> {
        self.repos
            .user_repository
            .load_all()
            .await
            .map_err(storage_err)
    }

    /// Edit the contact fields of an account
    ///
    /// The cédula selects the record and never changes; the stored role
    /// and password hash are carried over untouched.
    pub async fn update_user(
        &self,
        email_domain: &str,
        request: &UserUpdateRequest,
    ) -> ApiResult<UserModel> {
        request.check(email_domain)?;

        let users = &self.repos.user_repository;
        let cedula = request.cedula.trim().to_string();
        let mut user = users
            .find_by_key(&cedula)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Usuario con cédula {cedula} no encontrado."))
            })?;

        let email_taken = users
            .find_by_email(request.correo.trim())
            .await
            .map_err(storage_err)?
            .is_some_and(|other| other.cedula.as_str() != cedula);
        if email_taken {
            return Err(ApiError::ValidationError(
                "Este correo electrónico ya está registrado por otro usuario.".to_string(),
            ));
        }

        user.nombres = bounded(request.nombres.trim())?;
        user.correo = bounded(&request.correo.trim().to_lowercase())?;
        user.telefono = bounded(request.telefono.trim())?;
        user.area_trabajo = WorkArea::from_str(request.area_trabajo.trim()).map_err(|_| {
            ApiError::ValidationError("Debes seleccionar un área de trabajo.".to_string())
        })?;

        users.update(user.clone()).await.map_err(storage_err)?;
        Ok(user)
    }

    /// Remove an account; administrator accounts cannot be removed
    pub async fn delete_user(&self, cedula: &str) -> ApiResult<()> {
        let users = &self.repos.user_repository;
        let key = cedula.to_string();
        let user = users
            .find_by_key(&key)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Usuario con cédula {cedula} no encontrado."))
            })?;
        if user.role == UserRole::Admin {
            return Err(ApiError::Unauthorized(
                "No se puede eliminar una cuenta de administrador.".to_string(),
            ));
        }
        users.delete(&key).await.map_err(storage_err)?;
        tracing::info!(%cedula, "account removed");
        Ok(())
    }
}
