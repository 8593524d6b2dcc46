pub mod announcement_repository;
pub mod certificate_repository;
pub mod enrollment_repository;
pub mod session_store;
pub mod training_repository;
pub mod user_repository;

pub use announcement_repository::AnnouncementRepositoryImpl;
pub use certificate_repository::CertificateRepositoryImpl;
pub use enrollment_repository::EnrollmentRepositoryImpl;
pub use session_store::SessionStore;
pub use training_repository::TrainingRepositoryImpl;
pub use user_repository::UserRepositoryImpl;
