use std::error::Error;
use std::sync::Arc;

use capacitaciones_db::models::training::TrainingModel;
use capacitaciones_db::storage::{keys, KeyValueStore};

use crate::store::collection::{read_collection, write_collection};

/// Training catalog persisted under the `capacitacionesData` key
pub struct TrainingRepositoryImpl {
    pub store: Arc<dyn KeyValueStore>,
}

impl TrainingRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub(super) async fn read_trainings(
        &self,
    ) -> Result<Vec<TrainingModel>, Box<dyn Error + Send + Sync>> {
        read_collection(self.store.as_ref(), keys::CAPACITACIONES_DATA).await
    }

    pub(super) async fn write_trainings(
        &self,
        trainings: &[TrainingModel],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        write_collection(self.store.as_ref(), keys::CAPACITACIONES_DATA, trainings).await
    }
}
