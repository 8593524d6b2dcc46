use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for an announcement (anuncio)
///
/// Persisted inside the `anunciosData` array; admin-owned, read-only for
/// users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementModel {
    pub id: Uuid,
    pub titulo: HeaplessString<200>,
    /// Rich HTML body authored in the external editor, stored verbatim
    pub contenido: String,
    #[serde(rename = "fechaPublicacion")]
    pub fecha_publicacion: NaiveDate,
}

impl Identifiable for AnnouncementModel {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}
