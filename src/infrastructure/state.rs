//! Application state containing repositories and shared resources

use std::sync::Arc;

use crate::domain::ItemRepository;
use crate::infrastructure::InMemoryItemRepository;
use crate::soap::SoapRouter;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Item repository, the single point of truth for both front-ends
    pub item_repo: Arc<dyn ItemRepository>,
    /// SOAP operation router over the same repository
    pub soap: SoapRouter,
}

impl AppState {
    /// Create an AppState over an arbitrary repository implementation
    pub fn new(item_repo: Arc<dyn ItemRepository>) -> Self {
        let soap = SoapRouter::new(item_repo.clone());
        Self { item_repo, soap }
    }

    /// Create an AppState backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemRepository::new()))
    }
}
