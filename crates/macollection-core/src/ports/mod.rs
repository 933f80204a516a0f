pub mod catalog_repository;
pub mod state_store;

pub use catalog_repository::{CatalogRepository, RepoError};
pub use state_store::{StateStore, StateStoreError};
