use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use capacitaciones_db::models::enrollment::EnrollmentIndex;
use capacitaciones_db::storage::{keys, KeyValueStore};

use crate::store::collection::{read_value, write_value};

/// Voluntary enrollment index persisted under `inscripcionesPorUsuario`
///
/// Stored as one object mapping cédula to an array of training IDs. The
/// whole index is loaded, mutated in memory and written back.
pub struct EnrollmentRepositoryImpl {
    pub store: Arc<dyn KeyValueStore>,
}

impl EnrollmentRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load_index(&self) -> Result<EnrollmentIndex, Box<dyn Error + Send + Sync>> {
        read_value(self.store.as_ref(), keys::INSCRIPCIONES_POR_USUARIO).await
    }

    pub async fn save_index(
        &self,
        index: &EnrollmentIndex,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        write_value(self.store.as_ref(), keys::INSCRIPCIONES_POR_USUARIO, index).await
    }

    /// Training IDs the identity voluntarily joined
    pub async fn for_user(&self, cedula: &str) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.load_index().await?.for_user(cedula))
    }

    pub async fn is_enrolled(
        &self,
        cedula: &str,
        id_capacitacion: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Ok(self.load_index().await?.is_enrolled(cedula, id_capacitacion))
    }

    /// Flip membership of (cédula, training) and persist the index;
    /// returns `true` when the identity is enrolled after the call
    pub async fn toggle(
        &self,
        cedula: &str,
        id_capacitacion: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut index = self.load_index().await?;
        let enrolled = index.toggle(cedula, id_capacitacion);
        self.save_index(&index).await?;
        Ok(enrolled)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_toggle_persists_across_reads(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context();
        let repo = &ctx.repos.enrollment_repository;
        let training = Uuid::new_v4();

        assert!(repo.toggle("1312345678", training).await?);
        assert!(repo.is_enrolled("1312345678", training).await?);
        assert_eq!(repo.for_user("1312345678").await?, vec![training]);

        assert!(!repo.toggle("1312345678", training).await?);
        assert!(!repo.is_enrolled("1312345678", training).await?);
        Ok(())
    }
}
