//! Named storage keys, matching the legacy persisted layout exactly.

/// Array of registered identities
pub const USERS: &str = "users";

/// Array of training records
pub const CAPACITACIONES_DATA: &str = "capacitacionesData";

/// Array of announcements
pub const ANUNCIOS_DATA: &str = "anunciosData";

/// Array of certificate assignments
pub const ASIGNACIONES_CERTIFICADOS: &str = "asignacionesCertificados";

/// Map of cédula to voluntarily joined training IDs
pub const INSCRIPCIONES_POR_USUARIO: &str = "inscripcionesPorUsuario";

// Scalar session keys, held redundantly with the serialized snapshot.
pub const CURRENT_USER_CEDULA: &str = "currentUserCedula";
pub const CURRENT_USER_NAME: &str = "currentUserName";
pub const CURRENT_USER_AREA: &str = "currentUserArea";
pub const CURRENT_USER_ROLE: &str = "currentUserRole";
pub const CURRENT_USER: &str = "currentUser";

/// Cédula stashed between the verify and reset steps of the
/// password-reset flow
pub const USER_CEDULA_TO_RESET: &str = "userCedulaToReset";
