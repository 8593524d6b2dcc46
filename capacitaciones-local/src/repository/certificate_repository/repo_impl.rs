use std::error::Error;
use std::sync::Arc;

use capacitaciones_db::models::certificate::CertificateAssignmentModel;
use capacitaciones_db::storage::{keys, KeyValueStore};

use crate::store::collection::{read_collection, write_collection};

/// Certificate ledger persisted under the `asignacionesCertificados` key
pub struct CertificateRepositoryImpl {
    pub store: Arc<dyn KeyValueStore>,
}

impl CertificateRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub(super) async fn read_assignments(
        &self,
    ) -> Result<Vec<CertificateAssignmentModel>, Box<dyn Error + Send + Sync>> {
        read_collection(self.store.as_ref(), keys::ASIGNACIONES_CERTIFICADOS).await
    }

    pub(super) async fn write_assignments(
        &self,
        assignments: &[CertificateAssignmentModel],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        write_collection(self.store.as_ref(), keys::ASIGNACIONES_CERTIFICADOS, assignments).await
    }

    /// Find the assignment attached to a training, if one exists
    ///
    /// The ledger carries at most one entry per training, enforced at
    /// assignment time.
    pub async fn find_by_training(
        &self,
        id_capacitacion: &uuid::Uuid,
    ) -> Result<Option<CertificateAssignmentModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .read_assignments()
            .await?
            .into_iter()
            .find(|a| a.id_capacitacion == *id_capacitacion))
    }
}
