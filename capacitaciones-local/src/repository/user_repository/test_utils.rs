#[cfg(test)]
pub mod test_utils {
    use capacitaciones_api::domain::session::UserRole;
    use capacitaciones_db::models::user::{UserModel, WorkArea};
    use heapless::String as HeaplessString;

    pub fn create_test_user(cedula: &str, correo: &str) -> UserModel {
        UserModel {
            nombres: HeaplessString::try_from("María Soledad Vera").unwrap(),
            cedula: HeaplessString::try_from(cedula).unwrap(),
            correo: HeaplessString::try_from(correo).unwrap(),
            telefono: HeaplessString::try_from("0987654321").unwrap(),
            area_trabajo: WorkArea::Docencia,
            password_hash: "$pbkdf2-sha256$i=600000$not-a-real-hash".to_string(),
            role: UserRole::User,
        }
    }
}
