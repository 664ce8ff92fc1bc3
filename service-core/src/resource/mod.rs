//! Generic create/list/read gateway over a single document collection.
//!
//! An entity type opts in by implementing [`Resource`]; [`routes`] then binds
//! `GET /{plural}`, `GET /{plural}/:key` and `POST /{plural}` to the handlers in
//! [`handlers`], all backed by whichever [`ResourceStore`] sits in [`GatewayState`].

pub mod handlers;
pub mod memory;
pub mod mongo;
pub mod store;

use axum::{Router, routing::get};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

pub use memory::InMemoryStore;
pub use mongo::MongoStore;
pub use store::{ResourceStore, StoreError};

/// A flat record kept in its own collection and looked up by one natural key.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + Unpin + Send + Sync + 'static
{
    /// Lowercase singular name used in messages, e.g. `profile`.
    const SINGULAR: &'static str;
    /// Lowercase plural name used for the route prefix, e.g. `profiles`.
    const PLURAL: &'static str;
    /// Document field holding the natural key.
    const KEY_FIELD: &'static str;

    fn key(&self) -> &str;
}

/// State shared by every handler of one gateway.
pub struct GatewayState<R: Resource> {
    pub service: &'static str,
    pub store: Arc<dyn ResourceStore<R>>,
}

impl<R: Resource> GatewayState<R> {
    pub fn new(service: &'static str, store: Arc<dyn ResourceStore<R>>) -> Self {
        Self { service, store }
    }
}

impl<R: Resource> Clone for GatewayState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service,
            store: Arc::clone(&self.store),
        }
    }
}

/// Routes for the three resource operations of `R`.
pub fn routes<R: Resource>() -> Router<GatewayState<R>> {
    let collection_path = format!("/{}", R::PLURAL);
    let item_path = format!("/{}/:key", R::PLURAL);

    Router::new()
        .route(
            &collection_path,
            get(handlers::list_resources::<R>).post(handlers::create_resource::<R>),
        )
        .route(&item_path, get(handlers::get_resource::<R>))
}
