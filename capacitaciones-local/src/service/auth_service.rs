use std::str::FromStr;
use std::sync::Arc;

use capacitaciones_api::domain::requests::{
    LoginRequest, NewPasswordRequest, NewUserRequest, PasswordResetRequest,
};
use capacitaciones_api::domain::route::Route;
use capacitaciones_api::domain::session::{SessionSnapshot, UserRole};
use capacitaciones_api::error::{ApiError, ApiResult};
use capacitaciones_api::service::CredentialVerifier;
use capacitaciones_db::models::user::{UserModel, WorkArea};
use capacitaciones_db::repository::{Create, ExistsByKey, FindByKey, Update};

use crate::config::PortalConfig;
use crate::local_repositories::LocalRepositories;
use crate::service::{bounded, storage_err};

/// A successful login: the session that was opened and where to land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub snapshot: SessionSnapshot,
    pub landing: Route,
}

/// The profile screen's read-only fields, with fallbacks filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub nombres: String,
    pub cedula: String,
    pub area: String,
    pub role: UserRole,
}

/// Shown in place of any profile field the session never recorded
pub const UNSPECIFIED_TEXT: &str = "No especificado";

/// Registration, login and password-recovery flows
///
/// The predefined administrator pair lives in the configuration, not in
/// the registry, and is checked before the registry is consulted, so the
/// admin can always sign in even over an empty store.
pub struct AuthService {
    repos: Arc<LocalRepositories>,
    verifier: Arc<dyn CredentialVerifier>,
    config: PortalConfig,
}

impl AuthService {
    pub fn new(
        repos: Arc<LocalRepositories>,
        verifier: Arc<dyn CredentialVerifier>,
        config: PortalConfig,
    ) -> Self {
        Self {
            repos,
            verifier,
            config,
        }
    }

    /// Register a new account with the regular user role
    pub async fn register(&self, request: &NewUserRequest) -> ApiResult<UserModel> {
        request.check(&self.config.email_domain)?;

        let cedula = request.cedula.trim().to_string();
        if cedula == self.config.admin_cedula {
            return Err(ApiError::ValidationError(
                "Esta cédula ya está registrada. Por favor, usa otra.".to_string(),
            ));
        }
        let users = &self.repos.user_repository;
        if users.exists_by_key(&cedula).await.map_err(storage_err)? {
            return Err(ApiError::ValidationError(
                "Esta cédula ya está registrada. Por favor, usa otra.".to_string(),
            ));
        }
        if users
            .find_by_email(request.correo.trim())
            .await
            .map_err(storage_err)?
            .is_some()
        {
            return Err(ApiError::ValidationError(
                "Este correo electrónico ya está registrado. Por favor, usa otro.".to_string(),
            ));
        }

        let area_trabajo = WorkArea::from_str(request.area_trabajo.trim()).map_err(|_| {
            ApiError::ValidationError("Debes seleccionar un área de trabajo.".to_string())
        })?;
        let user = UserModel {
            nombres: bounded(request.nombres.trim())?,
            cedula: bounded(&cedula)?,
            correo: bounded(&request.correo.trim().to_lowercase())?,
            telefono: bounded(request.telefono.trim())?,
            area_trabajo,
            password_hash: self.verifier.hash_password(&request.contrasena)?,
            role: UserRole::User,
        };

        users.create(user.clone()).await.map_err(storage_err)?;
        tracing::info!(cedula = %user.cedula, "registered new account");
        Ok(user)
    }

    /// Authenticate and open a session
    ///
    /// Both unknown cédulas and wrong passwords surface the same message,
    /// so the login form leaks nothing about which accounts exist.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginOutcome> {
        request.check()?;
        let cedula = request.cedula.trim();

        if cedula == self.config.admin_cedula {
            // The configured pair goes through the same hash scheme as
            // registry accounts.
            let reference = self.verifier.hash_password(&self.config.admin_password)?;
            if !self
                .verifier
                .verify_password(&request.contrasena, &reference)
            {
                return Err(ApiError::Unauthorized(
                    "Cédula o contraseña incorrectas.".to_string(),
                ));
            }
            let snapshot = SessionSnapshot {
                cedula: self.config.admin_cedula.clone(),
                name: self.config.admin_name.clone(),
                area: self.config.admin_area.clone(),
                role: UserRole::Admin,
            };
            self.open(&snapshot).await?;
            return Ok(LoginOutcome {
                snapshot,
                landing: Route::Dashboard,
            });
        }

        let user = self
            .repos
            .user_repository
            .find_by_key(&cedula.to_string())
            .await
            .map_err(storage_err)?
            .filter(|u| {
                self.verifier
                    .verify_password(&request.contrasena, &u.password_hash)
            })
            .ok_or_else(|| {
                ApiError::Unauthorized("Cédula o contraseña incorrectas.".to_string())
            })?;

        let snapshot = SessionSnapshot {
            cedula: user.cedula.to_string(),
            name: user.nombres.to_string(),
            area: user.area_trabajo.to_string(),
            role: user.role,
        };
        self.open(&snapshot).await?;
        let landing = match user.role {
            UserRole::Admin => Route::Dashboard,
            UserRole::User => Route::UserDashboard,
        };
        Ok(LoginOutcome { snapshot, landing })
    }

    async fn open(&self, snapshot: &SessionSnapshot) -> ApiResult<()> {
        self.repos
            .session_store
            .set_session(snapshot)
            .await
            .map_err(storage_err)?;
        tracing::info!(cedula = %snapshot.cedula, role = %snapshot.role, "session opened");
        Ok(())
    }

    /// Close the active session, if any
    pub async fn logout(&self) -> ApiResult<()> {
        self.repos
            .session_store
            .clear_session()
            .await
            .map_err(storage_err)
    }

    pub async fn current_session(&self) -> ApiResult<Option<SessionSnapshot>> {
        self.repos
            .session_store
            .current_session()
            .await
            .map_err(storage_err)
    }

    /// First recovery step: verify the cédula + email pair and remember
    /// which account may set a new password
    pub async fn request_password_reset(&self, request: &PasswordResetRequest) -> ApiResult<()> {
        request.check(&self.config.email_domain)?;

        let cedula = request.cedula.trim().to_string();
        let correo = request.correo.trim().to_lowercase();
        let matches = self
            .repos
            .user_repository
            .find_by_key(&cedula)
            .await
            .map_err(storage_err)?
            .is_some_and(|u| u.correo.to_lowercase() == correo);
        if !matches {
            return Err(ApiError::NotFound(
                "Cédula o correo no encontrados en nuestros registros.".to_string(),
            ));
        }

        self.repos
            .session_store
            .stash_reset_cedula(&cedula)
            .await
            .map_err(storage_err)
    }

    /// Second recovery step: replace the password of the verified account
    pub async fn reset_password(&self, request: &NewPasswordRequest) -> ApiResult<()> {
        request.check()?;

        let sessions = &self.repos.session_store;
        let cedula = sessions
            .reset_cedula()
            .await
            .map_err(storage_err)?
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "Acceso no autorizado. Por favor, verifica tu cuenta primero.".to_string(),
                )
            })?;

        let users = &self.repos.user_repository;
        let mut user = users
            .find_by_key(&cedula)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| {
                ApiError::NotFound(
                    "Cédula o correo no encontrados en nuestros registros.".to_string(),
                )
            })?;
        user.password_hash = self.verifier.hash_password(&request.nueva_contrasena)?;
        users.update(user).await.map_err(storage_err)?;

        sessions.clear_reset_cedula().await.map_err(storage_err)?;
        tracing::info!(%cedula, "password reset completed");
        Ok(())
    }

    /// The registry record behind the active session
    ///
    /// The predefined administrator has no registry record, so an admin
    /// session resolves to a not-found error here.
    pub async fn current_profile(&self) -> ApiResult<UserModel> {
        let snapshot = self.current_session().await?.ok_or_else(|| {
            ApiError::Unauthorized("No hay una sesión activa.".to_string())
        })?;
        self.repos
            .user_repository
            .find_by_key(&snapshot.cedula)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "Usuario con cédula {} no encontrado.",
                    snapshot.cedula
                ))
            })
    }

    /// The profile screen as rendered from the session snapshot
    ///
    /// Empty fields fall back to placeholder text instead of blanks.
    pub async fn profile_view(&self) -> ApiResult<ProfileView> {
        let snapshot = self.current_session().await?.ok_or_else(|| {
            ApiError::Unauthorized("No hay una sesión activa.".to_string())
        })?;
        Ok(ProfileView {
            nombres: or_unspecified(snapshot.name),
            cedula: or_unspecified(snapshot.cedula),
            area: or_unspecified(snapshot.area),
            role: snapshot.role,
        })
    }
}

fn or_unspecified(value: String) -> String {
    if value.trim().is_empty() {
        UNSPECIFIED_TEXT.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use capacitaciones_api::domain::requests::{
        LoginRequest, NewPasswordRequest, NewUserRequest, PasswordResetRequest,
    };
    use capacitaciones_api::domain::route::Route;
    use capacitaciones_api::domain::session::UserRole;
    use capacitaciones_api::error::ApiError;

    fn registration(cedula: &str, correo: &str) -> NewUserRequest {
        NewUserRequest {
            nombres: "Ana María Vera".to_string(),
            cedula: cedula.to_string(),
            correo: correo.to_string(),
            telefono: "0991234567".to_string(),
            contrasena: "secreta1".to_string(),
            confirmar_contrasena: "secreta1".to_string(),
            area_trabajo: "Docencia".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login_lands_on_user_dashboard(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();

        ctx.auth_service
            .register(&registration("1312345678", "ana@uleam.edu.ec"))
            .await?;

        let outcome = ctx
            .auth_service
            .login(&LoginRequest {
                cedula: "1312345678".to_string(),
                contrasena: "secreta1".to_string(),
            })
            .await?;
        assert_eq!(outcome.landing, Route::UserDashboard);
        assert_eq!(outcome.snapshot.role, UserRole::User);
        assert_eq!(outcome.snapshot.name, "Ana María Vera");

        let session = ctx.auth_service.current_session().await?.unwrap();
        assert_eq!(session, outcome.snapshot);
        Ok(())
    }

    #[tokio::test]
    async fn test_admin_pair_logs_in_over_an_empty_registry(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();

        let outcome = ctx
            .auth_service
            .login(&LoginRequest {
                cedula: "1234567890".to_string(),
                contrasena: "admin123".to_string(),
            })
            .await?;
        assert_eq!(outcome.landing, Route::Dashboard);
        assert!(outcome.snapshot.is_admin());
        assert_eq!(outcome.snapshot.name, "Admin Talento Humano");

        let wrong = ctx
            .auth_service
            .login(&LoginRequest {
                cedula: "1234567890".to_string(),
                contrasena: "admin124".to_string(),
            })
            .await;
        match wrong {
            Err(ApiError::Unauthorized(msg)) => {
                assert_eq!(msg, "Cédula o contraseña incorrectas.")
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_cedula_share_a_message(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        ctx.auth_service
            .register(&registration("1312345678", "ana@uleam.edu.ec"))
            .await?;

        let wrong_password = ctx
            .auth_service
            .login(&LoginRequest {
                cedula: "1312345678".to_string(),
                contrasena: "equivocada".to_string(),
            })
            .await;
        let unknown = ctx
            .auth_service
            .login(&LoginRequest {
                cedula: "0999999999".to_string(),
                contrasena: "secreta1".to_string(),
            })
            .await;
        for result in [wrong_password, unknown] {
            match result {
                Err(ApiError::Unauthorized(msg)) => {
                    assert_eq!(msg, "Cédula o contraseña incorrectas.")
                }
                other => panic!("expected Unauthorized, got {other:?}"),
            }
        }
        assert!(ctx.auth_service.current_session().await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_cedula_and_email_are_rejected(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        ctx.auth_service
            .register(&registration("1312345678", "ana@uleam.edu.ec"))
            .await?;

        let same_cedula = ctx
            .auth_service
            .register(&registration("1312345678", "otra@uleam.edu.ec"))
            .await;
        assert!(matches!(same_cedula, Err(ApiError::ValidationError(_))));

        let same_email = ctx
            .auth_service
            .register(&registration("0911111111", "Ana@uleam.edu.ec"))
            .await;
        assert!(matches!(same_email, Err(ApiError::ValidationError(_))));

        let admin_cedula = ctx
            .auth_service
            .register(&registration("1234567890", "nueva@uleam.edu.ec"))
            .await;
        assert!(matches!(admin_cedula, Err(ApiError::ValidationError(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_registration_leaves_the_registry_unchanged(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();

        let mut bad_email = registration("1312345678", "ana@gmail.com");
        assert!(ctx.auth_service.register(&bad_email).await.is_err());
        bad_email.correo = "ana maria@uleam.edu.ec".to_string();
        assert!(ctx.auth_service.register(&bad_email).await.is_err());

        assert!(ctx.user_admin_service.list_users().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_password_recovery_flow() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let ctx = setup_test_context();
        ctx.auth_service
            .register(&registration("1312345678", "ana@uleam.edu.ec"))
            .await?;

        // Setting a new password without verifying first is rejected.
        let premature = ctx
            .auth_service
            .reset_password(&NewPasswordRequest {
                nueva_contrasena: "renovada1".to_string(),
                confirmar_contrasena: "renovada1".to_string(),
            })
            .await;
        assert!(matches!(premature, Err(ApiError::Unauthorized(_))));

        let mismatch = ctx
            .auth_service
            .request_password_reset(&PasswordResetRequest {
                cedula: "1312345678".to_string(),
                correo: "otra@uleam.edu.ec".to_string(),
            })
            .await;
        assert!(matches!(mismatch, Err(ApiError::NotFound(_))));

        ctx.auth_service
            .request_password_reset(&PasswordResetRequest {
                cedula: "1312345678".to_string(),
                correo: "ana@uleam.edu.ec".to_string(),
            })
            .await?;
        ctx.auth_service
            .reset_password(&NewPasswordRequest {
                nueva_contrasena: "renovada1".to_string(),
                confirmar_contrasena: "renovada1".to_string(),
            })
            .await?;

        let old = ctx
            .auth_service
            .login(&LoginRequest {
                cedula: "1312345678".to_string(),
                contrasena: "secreta1".to_string(),
            })
            .await;
        assert!(old.is_err());
        let renewed = ctx
            .auth_service
            .login(&LoginRequest {
                cedula: "1312345678".to_string(),
                contrasena: "renovada1".to_string(),
            })
            .await;
        assert!(renewed.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn test_logout_clears_the_session(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        ctx.auth_service
            .register(&registration("1312345678", "ana@uleam.edu.ec"))
            .await?;
        ctx.auth_service
            .login(&LoginRequest {
                cedula: "1312345678".to_string(),
                contrasena: "secreta1".to_string(),
            })
            .await?;

        ctx.auth_service.logout().await?;
        assert!(ctx.auth_service.current_session().await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_view_fills_fallbacks(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();

        let no_session = ctx.auth_service.profile_view().await;
        assert!(matches!(no_session, Err(ApiError::Unauthorized(_))));

        ctx.auth_service
            .register(&registration("1312345678", "ana@uleam.edu.ec"))
            .await?;
        ctx.auth_service
            .login(&LoginRequest {
                cedula: "1312345678".to_string(),
                contrasena: "secreta1".to_string(),
            })
            .await?;

        let profile = ctx.auth_service.profile_view().await?;
        assert_eq!(profile.nombres, "Ana María Vera");
        assert_eq!(profile.area, "Docencia");

        // A session with a wiped name renders the placeholder.
        let mut snapshot = ctx.auth_service.current_session().await?.unwrap();
        snapshot.name = String::new();
        ctx.repos.session_store.set_session(&snapshot).await?;
        let profile = ctx.auth_service.profile_view().await?;
        assert_eq!(profile.nombres, super::UNSPECIFIED_TEXT);
        Ok(())
    }

    #[tokio::test]
    async fn test_stored_passwords_are_hashed(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let user = ctx
            .auth_service
            .register(&registration("1312345678", "ana@uleam.edu.ec"))
            .await?;
        assert_ne!(user.password_hash, "secreta1");
        assert!(user.password_hash.starts_with("$pbkdf2"));
        Ok(())
    }
}
