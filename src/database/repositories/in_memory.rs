use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use super::{Entity, Repository, RepositoryError};

/// In-memory substitute for the Postgres-backed repository
///
/// Backs the no-database run mode and the integration tests. Identifiers are
/// assigned from a monotonically increasing counter starting at 1, matching
/// the SERIAL column of the real store.
pub struct InMemoryRepository<T> {
    records: Mutex<Vec<T>>,
    next_id: AtomicI32,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<T>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn create(&self, draft: T::Draft) -> Result<T, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entity = T::from_draft(draft, id);
        self.records.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    fn update(&self, entity: &T) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn delete(&self, entity: &T) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id() != entity.id());
        if records.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{NewProduct, Product};
    use rust_decimal_macros::dec;

    fn draft(name: &str, color: &str, stock: i32) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            color: color.to_string(),
            stock,
            price: dec!(10),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = InMemoryRepository::<Product>::new();

        let first = repo.create(draft("Kalem", "red", 50)).await.unwrap();
        let second = repo.create(draft("Defter", "blue", 20)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn get_by_id_round_trips_stored_entities() {
        let repo = InMemoryRepository::<Product>::new();
        let created = repo.create(draft("Kalem", "red", 50)).await.unwrap();

        let found = repo.get_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created));
        assert_eq!(repo.get_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_all_is_idempotent_without_mutation() {
        let repo = InMemoryRepository::<Product>::new();
        repo.create(draft("Kalem", "red", 50)).await.unwrap();
        repo.create(draft("Defter", "blue", 20)).await.unwrap();

        let first = repo.get_all().await.unwrap();
        let second = repo.get_all().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn update_replaces_matching_record() {
        let repo = InMemoryRepository::<Product>::new();
        let mut product = repo.create(draft("Kalem", "red", 50)).await.unwrap();

        product.stock = 40;
        repo.update(&product).unwrap();

        let found = repo.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found.stock, 40);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_not_found() {
        let repo = InMemoryRepository::<Product>::new();
        let phantom = Product::from_draft(draft("Kalem", "red", 50), 99);

        let result = repo.update(&phantom);

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_record_and_rejects_unknown() {
        let repo = InMemoryRepository::<Product>::new();
        let product = repo.create(draft("Kalem", "red", 50)).await.unwrap();

        repo.delete(&product).unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
        assert!(matches!(
            repo.delete(&product),
            Err(RepositoryError::NotFound)
        ));
    }
}
