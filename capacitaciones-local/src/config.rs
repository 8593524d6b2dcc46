use serde::Deserialize;

/// Portal configuration
///
/// Defaults reproduce the legacy deployment constants: the predefined
/// administrator pair, the organization email domain and the single
/// generic certificate document shared by every assignment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Required suffix of every registered email address
    pub email_domain: String,
    /// Cédula that always authenticates as administrator, regardless of
    /// the registry contents
    pub admin_cedula: String,
    pub admin_password: String,
    pub admin_name: String,
    pub admin_area: String,
    /// URL of the certificate document bound to every assignment
    pub certificate_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            email_domain: "uleam.edu.ec".to_string(),
            admin_cedula: "1234567890".to_string(),
            admin_password: "admin123".to_string(),
            admin_name: "Admin Talento Humano".to_string(),
            admin_area: "Departamento de Talento Humano".to_string(),
            certificate_url: "/pdf/Certificado.pdf".to_string(),
        }
    }
}
