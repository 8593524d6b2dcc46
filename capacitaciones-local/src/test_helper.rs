//! Test helper module for isolated in-memory portal contexts
//!
//! Every test gets a fresh `MemoryStore`, so state never leaks between
//! tests and no cleanup is needed.

use std::sync::Arc;

use capacitaciones_api::service::Pbkdf2Verifier;
use capacitaciones_db::storage::KeyValueStore;

use crate::config::PortalConfig;
use crate::local_repositories::LocalRepositories;
use crate::service::{
    AnnouncementService, AuthService, CertificateService, EnrollmentService, TrainingService,
    UserAdminService,
};
use crate::store::memory::MemoryStore;

/// A fully wired portal over a private in-memory store
pub struct TestContext {
    pub store: Arc<dyn KeyValueStore>,
    pub repos: Arc<LocalRepositories>,
    pub config: PortalConfig,
    pub auth_service: AuthService,
    pub user_admin_service: UserAdminService,
    pub training_service: TrainingService,
    pub announcement_service: AnnouncementService,
    pub certificate_service: CertificateService,
    pub enrollment_service: EnrollmentService,
}

/// Build a portal context backed by a fresh in-memory store
pub fn setup_test_context() -> TestContext {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let repos = Arc::new(LocalRepositories::new(store.clone()));
    let config = PortalConfig::default();

    TestContext {
        store,
        repos: repos.clone(),
        config: config.clone(),
        auth_service: AuthService::new(
            repos.clone(),
            Arc::new(Pbkdf2Verifier::default()),
            config.clone(),
        ),
        user_admin_service: UserAdminService::new(repos.clone()),
        training_service: TrainingService::new(repos.clone()),
        announcement_service: AnnouncementService::new(repos.clone()),
        certificate_service: CertificateService::new(repos.clone(), config.clone()),
        enrollment_service: EnrollmentService::new(repos, config),
    }
}
