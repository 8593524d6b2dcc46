use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Database model for the enrollment-type enum
///
/// Stored as the form strings `Obligatoria` / `Libre`. Historic records
/// carry inconsistent casing, so parsing is case-insensitive and anything
/// unrecognized normalizes to `Libre` (open enrollment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrollmentType {
    Obligatoria,
    #[default]
    Libre,
}

impl EnrollmentType {
    pub fn is_mandatory(&self) -> bool {
        matches!(self, EnrollmentType::Obligatoria)
    }
}

impl std::fmt::Display for EnrollmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentType::Obligatoria => write!(f, "Obligatoria"),
            EnrollmentType::Libre => write!(f, "Libre"),
        }
    }
}

impl FromStr for EnrollmentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "obligatoria" => Ok(EnrollmentType::Obligatoria),
            "libre" | "opcional" => Ok(EnrollmentType::Libre),
            _ => Err(()),
        }
    }
}

pub fn serialize_enrollment_type<S: Serializer>(
    value: &EnrollmentType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize_enrollment_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<EnrollmentType, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_default())
}
