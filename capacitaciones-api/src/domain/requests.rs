use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, ApiResult};

/// Registration form payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUserRequest {
    #[validate(length(min = 1, message = "Los nombres son obligatorios."))]
    pub nombres: String,
    pub cedula: String,
    #[validate(email(message = "Introduce un correo con formato válido."))]
    pub correo: String,
    pub telefono: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres."))]
    pub contrasena: String,
    pub confirmar_contrasena: String,
    pub area_trabajo: String,
}

impl NewUserRequest {
    /// Field-format checks; uniqueness is checked by the service against
    /// the registry.
    pub fn check(&self, email_domain: &str) -> ApiResult<()> {
        collect(self.validate())?;
        ensure_letters_and_spaces(self.nombres.trim())?;
        ensure_ten_digits(self.cedula.trim(), "La cédula")?;
        ensure_ten_digits(self.telefono.trim(), "El teléfono")?;
        ensure_org_domain(self.correo.trim(), email_domain)?;
        if self.contrasena != self.confirmar_contrasena {
            return Err(ApiError::ValidationError(
                "Las contraseñas no coinciden.".to_string(),
            ));
        }
        if self.area_trabajo.trim().is_empty() {
            return Err(ApiError::ValidationError(
                "Debes seleccionar un área de trabajo.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Admin edit of an existing user; the cédula selects the record and is
/// immutable, the stored role is preserved by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserUpdateRequest {
    #[validate(length(min = 1, message = "Los nombres son obligatorios."))]
    pub nombres: String,
    pub cedula: String,
    #[validate(email(message = "Introduce un correo con formato válido."))]
    pub correo: String,
    pub telefono: String,
    pub area_trabajo: String,
}

impl UserUpdateRequest {
    pub fn check(&self, email_domain: &str) -> ApiResult<()> {
        collect(self.validate())?;
        ensure_letters_and_spaces(self.nombres.trim())?;
        ensure_ten_digits(self.telefono.trim(), "El teléfono")?;
        ensure_org_domain(self.correo.trim(), email_domain)?;
        if self.area_trabajo.trim().is_empty() {
            return Err(ApiError::ValidationError(
                "Debes seleccionar un área de trabajo.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Login form payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    pub cedula: String,
    #[validate(length(min = 1, message = "La contraseña es obligatoria."))]
    pub contrasena: String,
}

impl LoginRequest {
    pub fn check(&self) -> ApiResult<()> {
        collect(self.validate())?;
        ensure_ten_digits(self.cedula.trim(), "La cédula")
    }
}

/// First step of the password-reset flow: verify cédula + email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordResetRequest {
    pub cedula: String,
    #[validate(email(message = "Introduce un correo con formato válido."))]
    pub correo: String,
}

impl PasswordResetRequest {
    pub fn check(&self, email_domain: &str) -> ApiResult<()> {
        collect(self.validate())?;
        ensure_ten_digits(self.cedula.trim(), "La cédula")?;
        ensure_org_domain(self.correo.trim(), email_domain)
    }
}

/// Second step of the password-reset flow: the replacement password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewPasswordRequest {
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres."))]
    pub nueva_contrasena: String,
    pub confirmar_contrasena: String,
}

impl NewPasswordRequest {
    pub fn check(&self) -> ApiResult<()> {
        collect(self.validate())?;
        if self.nueva_contrasena != self.confirmar_contrasena {
            return Err(ApiError::ValidationError(
                "Las contraseñas no coinciden.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Create/edit payload for a training record
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TrainingDraft {
    #[validate(length(min = 1, message = "El título es obligatorio."))]
    pub titulo: String,
    #[validate(length(min = 1, message = "La descripción corta es obligatoria."))]
    pub descripcion_corta: String,
    pub duracion: String,
    pub tipo_inscripcion: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub contenido_completo: String,
}

impl TrainingDraft {
    pub fn check(&self) -> ApiResult<()> {
        collect(self.validate())?;
        if self.fecha_fin < self.fecha_inicio {
            return Err(ApiError::ValidationError(
                "La fecha de fin no puede ser anterior a la fecha de inicio.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Create/edit payload for an announcement
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnnouncementDraft {
    #[validate(length(min = 1, message = "El título es obligatorio."))]
    pub titulo: String,
    #[validate(length(min = 1, message = "El contenido es obligatorio."))]
    pub contenido: String,
    pub fecha_publicacion: NaiveDate,
}

impl AnnouncementDraft {
    pub fn check(&self) -> ApiResult<()> {
        collect(self.validate())
    }
}

/// Certificate assignment payload: which training, assigned when
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateAssignmentRequest {
    pub id_capacitacion: Uuid,
    pub fecha_asignacion: NaiveDate,
}

fn collect(result: Result<(), validator::ValidationErrors>) -> ApiResult<()> {
    result.map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field| field.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Por favor, corrige los errores en el formulario.".to_string());
        ApiError::ValidationError(message)
    })
}

fn ensure_ten_digits(value: &str, field: &str) -> ApiResult<()> {
    if value.len() == 10 && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ApiError::ValidationError(format!(
            "{field} debe contener exactamente 10 dígitos numéricos."
        )))
    }
}

fn ensure_letters_and_spaces(value: &str) -> ApiResult<()> {
    if !value.is_empty() && value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        Ok(())
    } else {
        Err(ApiError::ValidationError(
            "Los nombres solo pueden contener letras y espacios.".to_string(),
        ))
    }
}

fn ensure_org_domain(email: &str, domain: &str) -> ApiResult<()> {
    let suffix = format!("@{domain}");
    let local_len = email.len().saturating_sub(suffix.len());
    let valid = email.ends_with(&suffix)
        && local_len > 0
        && !email[..local_len].contains(char::is_whitespace)
        && !email[..local_len].contains('@');
    if valid {
        Ok(())
    } else {
        Err(ApiError::ValidationError(format!(
            "Por favor, introduce un correo válido con dominio @{domain}."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "uleam.edu.ec";

    fn valid_registration() -> NewUserRequest {
        NewUserRequest {
            nombres: "Ana María Vera".to_string(),
            cedula: "1122334455".to_string(),
            correo: "ana@uleam.edu.ec".to_string(),
            telefono: "0991234567".to_string(),
            contrasena: "secreta1".to_string(),
            confirmar_contrasena: "secreta1".to_string(),
            area_trabajo: "Docencia".to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(valid_registration().check(DOMAIN).is_ok());
    }

    #[test]
    fn cedula_must_be_ten_digits() {
        let mut req = valid_registration();
        req.cedula = "12345".to_string();
        assert!(req.check(DOMAIN).is_err());
        req.cedula = "12345678ab".to_string();
        assert!(req.check(DOMAIN).is_err());
    }

    #[test]
    fn email_must_carry_the_org_domain() {
        let mut req = valid_registration();
        req.correo = "ana@gmail.com".to_string();
        assert!(req.check(DOMAIN).is_err());
        req.correo = "@uleam.edu.ec".to_string();
        assert!(req.check(DOMAIN).is_err());
        req.correo = "ana maria@uleam.edu.ec".to_string();
        assert!(req.check(DOMAIN).is_err());
    }

    #[test]
    fn names_reject_digits_but_accept_accents() {
        let mut req = valid_registration();
        req.nombres = "José Ñacato".to_string();
        assert!(req.check(DOMAIN).is_ok());
        req.nombres = "R2D2".to_string();
        assert!(req.check(DOMAIN).is_err());
    }

    #[test]
    fn password_confirmation_must_match() {
        let mut req = valid_registration();
        req.confirmar_contrasena = "otra".to_string();
        assert!(req.check(DOMAIN).is_err());
    }

    #[test]
    fn short_passwords_are_rejected() {
        let mut req = valid_registration();
        req.contrasena = "abc".to_string();
        req.confirmar_contrasena = "abc".to_string();
        assert!(req.check(DOMAIN).is_err());
    }

    #[test]
    fn training_dates_must_be_ordered() {
        let draft = TrainingDraft {
            titulo: "Seguridad 101".to_string(),
            descripcion_corta: "Curso básico".to_string(),
            duracion: "8 horas".to_string(),
            tipo_inscripcion: "Libre".to_string(),
            fecha_inicio: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            contenido_completo: "<p>Temario</p>".to_string(),
        };
        assert!(draft.check().is_err());

        let ok = TrainingDraft {
            fecha_fin: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            fecha_inicio: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            ..draft
        };
        // Equal start/end is allowed.
        assert!(ok.check().is_ok());
    }
}
