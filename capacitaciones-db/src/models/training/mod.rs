pub mod common_enums;
pub mod training;

// Re-exports
pub use common_enums::*;
pub use training::*;
