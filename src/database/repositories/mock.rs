//! Hand-rolled repository mock for handler tests
//!
//! Behaves like the in-memory store but additionally counts calls to the
//! mutating operations, so tests can assert that an action never reached the
//! store. `failing()` builds a mock whose every operation reports a storage
//! error, for exercising the 500 paths.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{Entity, Repository, RepositoryError};
use crate::database::connection::DatabaseError;
use crate::database::models::{NewProduct, Product};

#[derive(Default)]
pub struct MockRepository {
    products: Mutex<Vec<Product>>,
    fail: AtomicBool,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Self::default()
        }
    }

    /// A repository whose every operation fails with a storage error
    pub fn failing() -> Self {
        Self {
            fail: AtomicBool::new(true),
            ..Self::default()
        }
    }

    fn check_storage(&self) -> Result<(), RepositoryError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage(DatabaseError::ConnectionPoolError(
                "connection refused".to_string(),
            )));
        }
        Ok(())
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Repository<Product> for MockRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.check_storage()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        self.check_storage()?;
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, draft: NewProduct) -> Result<Product, RepositoryError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_storage()?;
        let mut products = self.products.lock().unwrap();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = Product::from_draft(draft, id);
        products.push(product.clone());
        Ok(product)
    }

    fn update(&self, entity: &Product) -> Result<(), RepositoryError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_storage()?;
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == entity.id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn delete(&self, entity: &Product) -> Result<(), RepositoryError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_storage()?;
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != entity.id);
        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
