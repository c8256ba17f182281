// Library Crate Root
// lib.rs

pub mod api;
pub mod database;
pub mod web;

// pub use = re-export at crate root
pub use api::{create_router, AppState};
pub use database::models::{NewProduct, Product};
pub use database::repositories::{InMemoryRepository, Repository, RepositoryError};
