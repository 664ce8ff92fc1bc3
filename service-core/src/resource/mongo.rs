use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc},
    error::ErrorKind,
};

use super::{Resource, ResourceStore, StoreError};
use crate::database::MongoDb;

/// MongoDB-backed store holding one collection of `R`.
pub struct MongoStore<R: Resource> {
    db: MongoDb,
    collection: Collection<R>,
}

impl<R: Resource> MongoStore<R> {
    pub fn new(db: &MongoDb, collection: &str) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection(collection),
        }
    }

    fn classify(err: mongodb::error::Error) -> StoreError {
        if let ErrorKind::BsonDeserialization(de) = &*err.kind {
            return StoreError::Decode {
                entity: R::SINGULAR,
                reason: de.to_string(),
            };
        }
        StoreError::Database(err)
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for MongoStore<R> {
    async fn list(&self) -> Result<Vec<R>, StoreError> {
        let mut cursor = self
            .collection
            .find(doc! {}, None)
            .await
            .map_err(Self::classify)?;

        // The cursor is closed when it drops, including on an early return.
        let mut records = Vec::new();
        while let Some(record) = cursor.try_next().await.map_err(Self::classify)? {
            records.push(record);
        }
        Ok(records)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<R>, StoreError> {
        let mut filter = Document::new();
        filter.insert(R::KEY_FIELD, key);

        self.collection
            .find_one(filter, None)
            .await
            .map_err(Self::classify)
    }

    async fn insert(&self, record: &R) -> Result<(), StoreError> {
        self.collection.insert_one(record, None).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.ping().await?;
        Ok(())
    }
}
