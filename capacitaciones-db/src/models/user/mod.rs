pub mod common_enums;
pub mod user;

// Re-exports
pub use common_enums::*;
pub use user::*;
