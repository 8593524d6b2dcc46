pub mod credentials;

// Re-exports
pub use credentials::*;
