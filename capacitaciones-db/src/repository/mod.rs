pub mod create;
pub mod delete;
pub mod exists_by_key;
pub mod find_by_key;
pub mod load_all;
pub mod save_all;
pub mod update;

// Re-exports
pub use create::*;
pub use delete::*;
pub use exists_by_key::*;
pub use find_by_key::*;
pub use load_all::*;
pub use save_all::*;
pub use update::*;
