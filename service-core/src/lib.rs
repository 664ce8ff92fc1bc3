//! service-core: Shared infrastructure for the resource gateway services.
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod resource;
pub mod startup;

pub use async_trait;
pub use axum;
pub use mongodb;
pub use tracing;
