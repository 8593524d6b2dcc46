pub mod announcement_service;
pub mod auth_service;
pub mod certificate_service;
pub mod enrollment_service;
pub mod training_service;
pub mod user_admin_service;

pub use announcement_service::AnnouncementService;
pub use auth_service::{AuthService, LoginOutcome, ProfileView};
pub use certificate_service::CertificateService;
pub use enrollment_service::{CertificateCard, EnrollmentFilter, EnrollmentService, TrainingCard};
pub use training_service::TrainingService;
pub use user_admin_service::UserAdminService;

use capacitaciones_api::error::{ApiError, ApiResult};
use heapless::String as HeaplessString;

pub(crate) fn storage_err(e: Box<dyn std::error::Error + Send + Sync>) -> ApiError {
    ApiError::StorageError(e.to_string())
}

pub(crate) fn bounded<const N: usize>(value: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::try_from(value).map_err(|_| {
        ApiError::ValidationError(format!(
            "El valor '{value}' supera la longitud máxima permitida."
        ))
    })
}
