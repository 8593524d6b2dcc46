pub mod models;
pub mod repository;
pub mod storage;

pub use models::*;
pub use repository::*;
pub use storage::*;
