#[cfg(test)]
pub mod test_utils {
    use capacitaciones_db::models::training::{EnrollmentType, TrainingModel};
    use chrono::NaiveDate;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    pub fn create_test_training(titulo: &str, tipo: EnrollmentType) -> TrainingModel {
        TrainingModel {
            id: Uuid::new_v4(),
            titulo: HeaplessString::try_from(titulo).unwrap(),
            descripcion_corta: "Curso introductorio para el personal.".to_string(),
            duracion: HeaplessString::try_from("20 horas").unwrap(),
            tipo_inscripcion: tipo,
            fecha_inicio: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2025, 3, 28).unwrap(),
            contenido_completo: "<p>Temario del curso.</p>".to_string(),
            completado: false,
            certificado_emitido: false,
            url_certificado: None,
            fecha_emision_certificado: None,
        }
    }
}
