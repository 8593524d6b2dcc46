use std::sync::Arc;

use capacitaciones_db::storage::KeyValueStore;

use crate::repository::{
    AnnouncementRepositoryImpl, CertificateRepositoryImpl, EnrollmentRepositoryImpl, SessionStore,
    TrainingRepositoryImpl, UserRepositoryImpl,
};

/// All repositories wired over one shared key-value store
///
/// The store plays the role of the browser's local storage; every
/// repository serializes into its own key of the same store, so handing
/// the same `Arc` to each keeps them mutually visible.
pub struct LocalRepositories {
    pub user_repository: Arc<UserRepositoryImpl>,
    pub training_repository: Arc<TrainingRepositoryImpl>,
    pub announcement_repository: Arc<AnnouncementRepositoryImpl>,
    pub certificate_repository: Arc<CertificateRepositoryImpl>,
    pub enrollment_repository: Arc<EnrollmentRepositoryImpl>,
    pub session_store: Arc<SessionStore>,
}

impl LocalRepositories {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            user_repository: Arc::new(UserRepositoryImpl::new(store.clone())),
            training_repository: Arc::new(TrainingRepositoryImpl::new(store.clone())),
            announcement_repository: Arc::new(AnnouncementRepositoryImpl::new(store.clone())),
            certificate_repository: Arc::new(CertificateRepositoryImpl::new(store.clone())),
            enrollment_repository: Arc::new(EnrollmentRepositoryImpl::new(store.clone())),
            session_store: Arc::new(SessionStore::new(store)),
        }
    }
}
