use std::error::Error;
use std::sync::Arc;

use capacitaciones_db::models::announcement::AnnouncementModel;
use capacitaciones_db::storage::{keys, KeyValueStore};

use crate::store::collection::{read_collection, write_collection};

/// Announcement board persisted under the `anunciosData` key
pub struct AnnouncementRepositoryImpl {
    pub store: Arc<dyn KeyValueStore>,
}

impl AnnouncementRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub(super) async fn read_announcements(
        &self,
    ) -> Result<Vec<AnnouncementModel>, Box<dyn Error + Send + Sync>> {
        read_collection(self.store.as_ref(), keys::ANUNCIOS_DATA).await
    }

    pub(super) async fn write_announcements(
        &self,
        announcements: &[AnnouncementModel],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        write_collection(self.store.as_ref(), keys::ANUNCIOS_DATA, announcements).await
    }
}
