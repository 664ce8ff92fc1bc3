//! In-memory store implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{Resource, ResourceStore, StoreError};

/// In-memory store for tests and local runs without MongoDB.
///
/// Records are kept in insertion order. Data is not persisted and will be lost
/// when the last clone is dropped.
#[derive(Debug)]
pub struct InMemoryStore<R> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R> Clone for InMemoryStore<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a store pre-populated with `records`.
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for InMemoryStore<R> {
    async fn list(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<R>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.key() == key).cloned())
    }

    async fn insert(&self, record: &R) -> Result<(), StoreError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
