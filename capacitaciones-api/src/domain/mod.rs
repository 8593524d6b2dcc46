pub mod requests;
pub mod route;
pub mod session;

// Re-exports
pub use requests::*;
pub use route::*;
pub use session::*;
