//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::Item;

/// Repository trait for the Item catalog
///
/// Implementations must apply each call atomically: a concurrent caller never
/// observes a half-applied create, update or delete.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Append a new item; fails with `DuplicateId` if the id is taken
    async fn create(&self, item: Item) -> Result<Item, DomainError>;

    /// All items in insertion order
    async fn find_all(&self) -> Result<Vec<Item>, DomainError>;

    /// Find an item by ID
    async fn find_by_id(&self, id: i64) -> Result<Item, DomainError>;

    /// Replace the whole record stored under `id`, keeping its position
    async fn update(&self, id: i64, item: Item) -> Result<Item, DomainError>;

    /// Delete an item by ID
    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    /// Remove every item
    async fn delete_all(&self) -> Result<(), DomainError>;
}
