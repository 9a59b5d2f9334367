#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Document store for categories
//!
//! A small key-value-by-id persistence seam. Handlers talk to the
//! [`CategoryStore`] trait; the in-memory backend is the only one
//! shipped, but the trait keeps the error channel real backends need.

mod memory;

use async_trait::async_trait;
use catalog_core::{Category, CategoryRequest};
use thiserror::Error;

pub use memory::MemoryStore;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend connection or command error
    #[error("storage backend: {0}")]
    Backend(String),
}

/// Creates and retrieves categories by id
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All stored categories, in no particular order
    async fn find_all(&self) -> Result<Vec<Category>, StoreError>;

    /// Look up a category by its id
    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, StoreError>;

    /// Persist a new category, assigning its id and creation time
    async fn save(&self, request: CategoryRequest) -> Result<Category, StoreError>;

    /// Remove every stored category
    async fn delete_all(&self) -> Result<(), StoreError>;
}
