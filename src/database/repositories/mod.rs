pub mod in_memory;
pub mod product_repository;

#[cfg(test)]
pub mod mock;

pub use in_memory::InMemoryRepository;
pub use product_repository::PgProductRepository;

use thiserror::Error;

use crate::database::connection::DatabaseError;

/// A persisted record type with a store-assigned integer identifier
pub trait Entity: Clone + Send + Sync + 'static {
    /// Insertable shape of the entity, before the store has assigned an id
    type Draft: Send + 'static;

    fn id(&self) -> i32;

    /// Materialize a stored entity from its draft and the assigned id
    fn from_draft(draft: Self::Draft, id: i32) -> Self;
}

/// Errors surfaced by repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record matches the requested identifier
    #[error("record not found")]
    NotFound,

    /// The underlying store failed
    #[error("storage error: {0}")]
    Storage(#[from] DatabaseError),
}

/// Generic repository trait - the single data-access seam between handlers
/// and the store
///
/// Reads and creation suspend on store I/O; update and delete commit before
/// returning. Updating or deleting an identifier with no matching record
/// returns `RepositoryError::NotFound` in every implementation.
#[async_trait::async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// All persisted instances, order unspecified. An empty store yields an
    /// empty vec, not an error.
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// The instance with the given identifier, or None
    async fn get_by_id(&self, id: i32) -> Result<Option<T>, RepositoryError>;

    /// Persist a new instance; the store assigns the identifier
    async fn create(&self, draft: T::Draft) -> Result<T, RepositoryError>;

    /// Replace the full record matching the entity's identifier
    fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Remove the record matching the entity's identifier
    fn delete(&self, entity: &T) -> Result<(), RepositoryError>;
}
