use async_trait::async_trait;
use thiserror::Error;

use super::Resource;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to decode {entity} record: {reason}")]
    Decode { entity: &'static str, reason: String },

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Persistence operations the gateway needs for one entity type.
///
/// Every call is a single round trip to the backing store; there are no retries.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// Returns every record in the collection, in store order.
    async fn list(&self) -> Result<Vec<R>, StoreError>;

    /// Returns the first record whose key field equals `key`.
    async fn find_by_key(&self, key: &str) -> Result<Option<R>, StoreError>;

    /// Inserts `record` as-is. Duplicate keys are accepted.
    async fn insert(&self, record: &R) -> Result<(), StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
