use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::models::training::common_enums::{
    deserialize_enrollment_type, serialize_enrollment_type, EnrollmentType,
};

/// Database model for a training record (capacitación)
///
/// Persisted inside the `capacitacionesData` array. The certificate fields
/// are absent until an assignment flips them and revert to absent when the
/// assignment is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingModel {
    pub id: Uuid,
    pub titulo: HeaplessString<200>,
    #[serde(rename = "descripcionCorta")]
    pub descripcion_corta: String,
    pub duracion: HeaplessString<50>,
    #[serde(
        rename = "tipoInscripcion",
        serialize_with = "serialize_enrollment_type",
        deserialize_with = "deserialize_enrollment_type",
        default
    )]
    pub tipo_inscripcion: EnrollmentType,
    #[serde(rename = "fechaInicio")]
    pub fecha_inicio: NaiveDate,
    #[serde(rename = "fechaFin")]
    pub fecha_fin: NaiveDate,
    /// Rich HTML body authored in the external editor, stored verbatim
    #[serde(rename = "contenidoCompleto")]
    pub contenido_completo: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub completado: bool,
    #[serde(rename = "certificadoEmitido", default, skip_serializing_if = "is_false")]
    pub certificado_emitido: bool,
    #[serde(rename = "urlCertificado", default, skip_serializing_if = "Option::is_none")]
    pub url_certificado: Option<String>,
    #[serde(
        rename = "fechaEmisionCertificado",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_emision_certificado: Option<NaiveDate>,
}

impl TrainingModel {
    /// True once a certificate has been assigned and issued for this
    /// training
    pub fn certificate_available(&self) -> bool {
        self.completado && self.certificado_emitido && self.url_certificado.is_some()
    }
}

impl Identifiable for TrainingModel {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
