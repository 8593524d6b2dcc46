use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Database model for the work-area catalogue
///
/// Fixed list offered by the registration and user-edit forms; persisted
/// as the literal option strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkArea {
    #[serde(rename = "Decanato")]
    Decanato,
    #[serde(rename = "Vicedecanato")]
    Vicedecanato,
    #[serde(rename = "Direccion de Carrera")]
    DireccionDeCarrera,
    #[serde(rename = "Docencia")]
    Docencia,
    #[serde(rename = "Investigacion")]
    Investigacion,
    #[serde(rename = "Secretaria Academica")]
    SecretariaAcademica,
    #[serde(rename = "Tecnico de Laboratorio")]
    TecnicoDeLaboratorio,
    #[serde(rename = "Soporte Informatico")]
    SoporteInformatico,
    #[serde(rename = "Administracion de Redes")]
    AdministracionDeRedes,
    #[serde(rename = "Desarrollo de Software Interno")]
    DesarrolloDeSoftwareInterno,
    #[serde(rename = "Vinculacion con la Sociedad")]
    VinculacionConLaSociedad,
    #[serde(rename = "Gestion Administrativa")]
    GestionAdministrativa,
    #[serde(rename = "Coordinacion de Proyectos")]
    CoordinacionDeProyectos,
    #[serde(rename = "Ciberseguridad")]
    Ciberseguridad,
    #[serde(rename = "Inteligencia Artificial")]
    InteligenciaArtificial,
    #[serde(rename = "Bases de Datos")]
    BasesDeDatos,
    #[serde(rename = "Desarrollo Web")]
    DesarrolloWeb,
    #[serde(rename = "Robotica")]
    Robotica,
    #[serde(rename = "Analisis de Datos")]
    AnalisisDeDatos,
    #[serde(rename = "Gestion de Calidad")]
    GestionDeCalidad,
    #[serde(rename = "Asesoria Estudiantil")]
    AsesoriaEstudiantil,
}

impl WorkArea {
    /// Every selectable area, in form order
    pub const ALL: [WorkArea; 21] = [
        WorkArea::Decanato,
        WorkArea::Vicedecanato,
        WorkArea::DireccionDeCarrera,
        WorkArea::Docencia,
        WorkArea::Investigacion,
        WorkArea::SecretariaAcademica,
        WorkArea::TecnicoDeLaboratorio,
        WorkArea::SoporteInformatico,
        WorkArea::AdministracionDeRedes,
        WorkArea::DesarrolloDeSoftwareInterno,
        WorkArea::VinculacionConLaSociedad,
        WorkArea::GestionAdministrativa,
        WorkArea::CoordinacionDeProyectos,
        WorkArea::Ciberseguridad,
        WorkArea::InteligenciaArtificial,
        WorkArea::BasesDeDatos,
        WorkArea::DesarrolloWeb,
        WorkArea::Robotica,
        WorkArea::AnalisisDeDatos,
        WorkArea::GestionDeCalidad,
        WorkArea::AsesoriaEstudiantil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkArea::Decanato => "Decanato",
            WorkArea::Vicedecanato => "Vicedecanato",
            WorkArea::DireccionDeCarrera => "Direccion de Carrera",
            WorkArea::Docencia => "Docencia",
            WorkArea::Investigacion => "Investigacion",
            WorkArea::SecretariaAcademica => "Secretaria Academica",
            WorkArea::TecnicoDeLaboratorio => "Tecnico de Laboratorio",
            WorkArea::SoporteInformatico => "Soporte Informatico",
            WorkArea::AdministracionDeRedes => "Administracion de Redes",
            WorkArea::DesarrolloDeSoftwareInterno => "Desarrollo de Software Interno",
            WorkArea::VinculacionConLaSociedad => "Vinculacion con la Sociedad",
            WorkArea::GestionAdministrativa => "Gestion Administrativa",
            WorkArea::CoordinacionDeProyectos => "Coordinacion de Proyectos",
            WorkArea::Ciberseguridad => "Ciberseguridad",
            WorkArea::InteligenciaArtificial => "Inteligencia Artificial",
            WorkArea::BasesDeDatos => "Bases de Datos",
            WorkArea::DesarrolloWeb => "Desarrollo Web",
            WorkArea::Robotica => "Robotica",
            WorkArea::AnalisisDeDatos => "Analisis de Datos",
            WorkArea::GestionDeCalidad => "Gestion de Calidad",
            WorkArea::AsesoriaEstudiantil => "Asesoria Estudiantil",
        }
    }
}

impl std::fmt::Display for WorkArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkArea {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkArea::ALL
            .iter()
            .find(|area| area.as_str() == s)
            .copied()
            .ok_or(())
    }
}
