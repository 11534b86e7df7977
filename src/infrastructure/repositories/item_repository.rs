//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainError, ItemRepository};
use crate::models::Item;

/// Vec-backed implementation of ItemRepository
///
/// Every operation holds the lock for its whole check-then-mutate sequence,
/// so concurrent requests cannot break id uniqueness or lose an update.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;

        if items.iter().any(|i| i.id == item.id) {
            return Err(DomainError::DuplicateId(item.id));
        }

        items.push(item.clone());
        Ok(item)
    }

    async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Item, DomainError> {
        self.items
            .read()
            .await
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(DomainError::NotFound(id))
    }

    async fn update(&self, id: i64, item: Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;

        let slot = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DomainError::NotFound(id))?;

        // The payload id is stored as-is, even when it differs from `id`.
        *slot = item.clone();
        Ok(item)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut items = self.items.write().await;

        let index = items
            .iter()
            .position(|i| i.id == id)
            .ok_or(DomainError::NotFound(id))?;

        items.remove(index);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.items.write().await.clear();
        Ok(())
    }
}
