use mongodb::{Client as MongoClient, Collection, Database, bson::doc};

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Builds a client for `uri` and selects `database`.
    ///
    /// The driver connects lazily, so callers should follow up with [`MongoDb::ping`]
    /// to find out whether the server is reachable.
    pub async fn connect(uri: &str, database: &str) -> mongodb::error::Result<Self> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            e
        })?;
        let db = client.database(database);
        Ok(Self { client, db })
    }

    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                e
            })?;
        Ok(())
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}
