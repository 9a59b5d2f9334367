use async_trait::async_trait;
use catalog_core::{Category, CategoryRequest};
use chrono::Utc;
use dashmap::DashMap;

use crate::{CategoryStore, StoreError};

/// In-memory category store backed by a concurrent map
#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: DashMap<String, Category>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, StoreError> {
        Ok(self.categories.get(id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, request: CategoryRequest) -> Result<Category, StoreError> {
        let category = Category {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description,
            created_at: Utc::now(),
        };

        self.categories.insert(category.id.clone(), category.clone());
        Ok(category)
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.categories.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> CategoryRequest {
        CategoryRequest {
            name: name.to_owned(),
            description: format!("{name} description"),
        }
    }

    #[tokio::test]
    async fn save_assigns_unique_ids() {
        let store = MemoryStore::new();

        let first = store.save(request("electronics")).await.unwrap();
        let second = store.save(request("books")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(!first.id.is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_saved_category() {
        let store = MemoryStore::new();
        let saved = store.save(request("electronics")).await.unwrap();

        let found = store.find_by_id(&saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn find_by_id_misses_on_unknown_id() {
        let store = MemoryStore::new();
        assert_eq!(store.find_by_id("123456").await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_all_returns_everything_saved() {
        let store = MemoryStore::new();
        store.save(request("electronics")).await.unwrap();
        store.save(request("books")).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn delete_all_empties_the_store() {
        let store = MemoryStore::new();
        store.save(request("electronics")).await.unwrap();

        store.delete_all().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
