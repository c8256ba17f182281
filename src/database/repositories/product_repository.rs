use diesel::prelude::*;
use std::sync::Arc;

use super::{Repository, RepositoryError};
use crate::database::connection::{DatabaseError, PgPooledConnection};
use crate::database::models::{NewProduct, Product};
use crate::database::schema::products;

/// PostgreSQL-backed implementation of `Repository<Product>`
///
/// Holds a connection provider rather than a pool so the storage backend can
/// be swapped without touching the queries.
pub struct PgProductRepository {
    get_conn: Arc<dyn Fn() -> Result<PgPooledConnection, DatabaseError> + Send + Sync>,
}

impl PgProductRepository {
    /// Create a new product repository with a connection provider
    pub fn new<F>(get_conn: F) -> Self
    where
        F: Fn() -> Result<PgPooledConnection, DatabaseError> + Send + Sync + 'static,
    {
        Self {
            get_conn: Arc::new(get_conn),
        }
    }
}

#[async_trait::async_trait]
impl Repository<Product> for PgProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = (self.get_conn)()?;

        products::table
            .load::<Product>(&mut conn)
            .map_err(DatabaseError::from)
            .map_err(RepositoryError::from)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = (self.get_conn)()?;

        products::table
            .find(id)
            .first::<Product>(&mut conn)
            .optional()
            .map_err(DatabaseError::from)
            .map_err(RepositoryError::from)
    }

    async fn create(&self, draft: NewProduct) -> Result<Product, RepositoryError> {
        let mut conn = (self.get_conn)()?;

        diesel::insert_into(products::table)
            .values(&draft)
            .get_result::<Product>(&mut conn)
            .map_err(DatabaseError::from)
            .map_err(RepositoryError::from)
    }

    fn update(&self, entity: &Product) -> Result<(), RepositoryError> {
        let mut conn = (self.get_conn)()?;

        let affected = diesel::update(products::table.find(entity.id))
            .set(entity)
            .execute(&mut conn)
            .map_err(DatabaseError::from)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn delete(&self, entity: &Product) -> Result<(), RepositoryError> {
        let mut conn = (self.get_conn)()?;

        let deleted = diesel::delete(products::table.find(entity.id))
            .execute(&mut conn)
            .map_err(DatabaseError::from)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
