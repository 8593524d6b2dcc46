/// Trait for entities addressed by a unique key in their collection
///
/// Trainings, announcements and certificate assignments are keyed by UUID;
/// users are keyed by their immutable 10-digit cédula.
pub trait Identifiable {
    /// The key type of the entity
    type Key: Clone + PartialEq + Send + Sync;

    /// Returns the unique key of the entity
    fn key(&self) -> Self::Key;
}
