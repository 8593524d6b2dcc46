use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for a certificate assignment
///
/// Persisted inside the `asignacionesCertificados` array. Invariant: at
/// most one assignment per training at a time; the training title is a
/// denormalized copy taken at assignment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateAssignmentModel {
    pub id: Uuid,
    #[serde(rename = "idCapacitacion")]
    pub id_capacitacion: Uuid,
    #[serde(rename = "tituloCapacitacion")]
    pub titulo_capacitacion: HeaplessString<200>,
    #[serde(rename = "fechaAsignacion")]
    pub fecha_asignacion: NaiveDate,
    #[serde(rename = "urlCertificadoAsociado")]
    pub url_certificado_asociado: String,
}

impl Identifiable for CertificateAssignmentModel {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}
