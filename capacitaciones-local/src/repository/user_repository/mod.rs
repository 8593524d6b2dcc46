pub mod repo_impl;
pub mod create;
pub mod delete;
pub mod exists_by_key;
pub mod find_by_key;
pub mod load_all;
pub mod save_all;
pub mod update;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::UserRepositoryImpl;
