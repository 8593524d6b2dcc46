use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A single (identity, training) enrollment relation
///
/// Only voluntary enrollments in open trainings exist as relations;
/// mandatory trainings are enrolled implicitly at render time and never
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentModel {
    pub cedula: String,
    pub id_capacitacion: Uuid,
}

/// The full enrollment index as persisted under `inscripcionesPorUsuario`
///
/// On the wire this is the legacy object mapping cédula to an array of
/// training IDs; in memory it behaves like a set of composite relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnrollmentIndex(BTreeMap<String, Vec<Uuid>>);

impl EnrollmentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Training IDs the given identity voluntarily joined
    pub fn for_user(&self, cedula: &str) -> Vec<Uuid> {
        self.0.get(cedula).cloned().unwrap_or_default()
    }

    pub fn is_enrolled(&self, cedula: &str, id_capacitacion: Uuid) -> bool {
        self.0
            .get(cedula)
            .is_some_and(|ids| ids.contains(&id_capacitacion))
    }

    /// Flip membership of (cédula, training); returns `true` when the
    /// identity is enrolled after the call
    pub fn toggle(&mut self, cedula: &str, id_capacitacion: Uuid) -> bool {
        let ids = self.0.entry(cedula.to_string()).or_default();
        if let Some(position) = ids.iter().position(|id| *id == id_capacitacion) {
            ids.remove(position);
            false
        } else {
            ids.push(id_capacitacion);
            true
        }
    }

    /// Flatten the index into composite relations
    pub fn relations(&self) -> Vec<EnrollmentModel> {
        self.0
            .iter()
            .flat_map(|(cedula, ids)| {
                ids.iter().map(|id| EnrollmentModel {
                    cedula: cedula.clone(),
                    id_capacitacion: *id,
                })
            })
            .collect()
    }
}
