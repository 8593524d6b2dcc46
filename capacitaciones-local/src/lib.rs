pub mod config;
pub mod local_repositories;
pub mod repository;
pub mod service;
pub mod store;

pub use config::PortalConfig;
pub use local_repositories::LocalRepositories;

#[cfg(test)]
pub mod test_helper;
