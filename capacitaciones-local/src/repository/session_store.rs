use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

use capacitaciones_api::domain::session::{SessionSnapshot, UserRole};
use capacitaciones_db::storage::{keys, KeyValueStore};

/// Active-session state persisted as scalar keys
///
/// The snapshot is written twice: once as one JSON value under
/// `currentUser` and once fanned out over the per-field scalar keys the
/// legacy screens read individually. Both layouts are kept in sync so
/// either can rebuild the session.
pub struct SessionStore {
    pub store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist the snapshot as the active session
    pub async fn set_session(
        &self,
        snapshot: &SessionSnapshot,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.store
            .put(keys::CURRENT_USER_CEDULA, snapshot.cedula.clone())
            .await?;
        self.store
            .put(keys::CURRENT_USER_NAME, snapshot.name.clone())
            .await?;
        self.store
            .put(keys::CURRENT_USER_AREA, snapshot.area.clone())
            .await?;
        self.store
            .put(keys::CURRENT_USER_ROLE, snapshot.role.to_string())
            .await?;
        self.store
            .put(keys::CURRENT_USER, serde_json::to_string(snapshot)?)
            .await?;
        Ok(())
    }

    /// Rebuild the active session, if any
    ///
    /// Prefers the JSON snapshot; when that is missing or malformed the
    /// scalar keys are consulted before giving up, so a partially wiped
    /// session still resolves.
    pub async fn current_session(
        &self,
    ) -> Result<Option<SessionSnapshot>, Box<dyn Error + Send + Sync>> {
        if let Some(raw) = self.store.get(keys::CURRENT_USER).await? {
            match serde_json::from_str(&raw) {
                Ok(snapshot) => return Ok(Some(snapshot)),
                Err(e) => {
                    tracing::warn!(error = %e, "malformed session snapshot, using scalar keys");
                }
            }
        }

        let cedula = match self.store.get(keys::CURRENT_USER_CEDULA).await? {
            Some(cedula) if !cedula.is_empty() => cedula,
            _ => return Ok(None),
        };
        let name = self
            .store
            .get(keys::CURRENT_USER_NAME)
            .await?
            .unwrap_or_default();
        let area = self
            .store
            .get(keys::CURRENT_USER_AREA)
            .await?
            .unwrap_or_default();
        let role = self
            .store
            .get(keys::CURRENT_USER_ROLE)
            .await?
            .and_then(|raw| UserRole::from_str(&raw).ok())
            .unwrap_or(UserRole::User);

        Ok(Some(SessionSnapshot {
            cedula,
            name,
            area,
            role,
        }))
    }

    /// Remove every session key
    pub async fn clear_session(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.store.remove(keys::CURRENT_USER_CEDULA).await?;
        self.store.remove(keys::CURRENT_USER_NAME).await?;
        self.store.remove(keys::CURRENT_USER_AREA).await?;
        self.store.remove(keys::CURRENT_USER_ROLE).await?;
        self.store.remove(keys::CURRENT_USER).await?;
        Ok(())
    }

    /// Remember which cédula is allowed to set a new password
    pub async fn stash_reset_cedula(
        &self,
        cedula: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.store
            .put(keys::USER_CEDULA_TO_RESET, cedula.to_string())
            .await
    }

    pub async fn reset_cedula(&self) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        self.store.get(keys::USER_CEDULA_TO_RESET).await
    }

    pub async fn clear_reset_cedula(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.store.remove(keys::USER_CEDULA_TO_RESET).await
    }
}
