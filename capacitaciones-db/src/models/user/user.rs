use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use capacitaciones_api::UserRole;

use crate::models::identifiable::Identifiable;
use crate::models::user::common_enums::WorkArea;

/// Database model for a registered identity
///
/// Persisted inside the `users` array. The cédula is the primary key of
/// every join and is immutable once created. The `contrasena` field holds
/// a PHC-format password hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub nombres: HeaplessString<100>,
    pub cedula: HeaplessString<10>,
    pub correo: HeaplessString<100>,
    pub telefono: HeaplessString<10>,
    pub area_trabajo: WorkArea,
    #[serde(rename = "contrasena")]
    pub password_hash: String,
    pub role: UserRole,
}

impl Identifiable for UserModel {
    type Key = String;

    fn key(&self) -> String {
        self.cedula.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserModel {
        UserModel {
            nombres: HeaplessString::try_from("Ana Vera").unwrap(),
            cedula: HeaplessString::try_from("1122334455").unwrap(),
            correo: HeaplessString::try_from("ana@uleam.edu.ec").unwrap(),
            telefono: HeaplessString::try_from("0991234567").unwrap(),
            area_trabajo: WorkArea::Docencia,
            password_hash: "$pbkdf2-sha256$i=600000$salt$hash".to_string(),
            role: UserRole::User,
        }
    }

    #[test]
    fn keyed_by_cedula() {
        assert_eq!(test_user().key(), "1122334455");
    }

    #[test]
    fn persists_with_the_legacy_field_names() {
        let value = serde_json::to_value(test_user()).unwrap();
        assert_eq!(value["cedula"], "1122334455");
        assert_eq!(value["area_trabajo"], "Docencia");
        assert_eq!(value["role"], "user");
        // The hash travels under the legacy field name.
        assert!(value["contrasena"].as_str().unwrap().starts_with("$pbkdf2"));
    }
}
