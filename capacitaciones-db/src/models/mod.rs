pub mod announcement;
pub mod certificate;
pub mod enrollment;
pub mod identifiable;
pub mod training;
pub mod user;

// Re-exports
pub use announcement::*;
pub use certificate::*;
pub use enrollment::*;
pub use identifiable::*;
pub use training::*;
pub use user::*;
