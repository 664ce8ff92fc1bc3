#![allow(dead_code)]

use async_trait::async_trait;
use profile_service::{config, models::Profile, SERVICE_NAME};
use service_core::axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use service_core::resource::{InMemoryStore, ResourceStore, StoreError};
use service_core::startup::{build_router, Application};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub fn alice() -> Profile {
    Profile {
        user: "alice".to_string(),
        address: "1 Main St".to_string(),
        responsible_individual: "Bob".to_string(),
        contact_number: "555-1234".to_string(),
    }
}

pub fn app_with_store(store: InMemoryStore<Profile>) -> Router {
    build_router::<Profile>(SERVICE_NAME, Arc::new(store))
}

pub fn failing_app() -> Router {
    build_router::<Profile>(SERVICE_NAME, Arc::new(FailingStore))
}

/// Store whose every operation fails with a record that cannot be decoded.
pub struct FailingStore;

fn decode_failure() -> StoreError {
    StoreError::Decode {
        entity: "profile",
        reason: "invalid type: integer, expected a string".to_string(),
    }
}

#[async_trait]
impl ResourceStore<Profile> for FailingStore {
    async fn list(&self) -> Result<Vec<Profile>, StoreError> {
        Err(decode_failure())
    }

    async fn find_by_key(&self, _key: &str) -> Result<Option<Profile>, StoreError> {
        Err(decode_failure())
    }

    async fn insert(&self, _record: &Profile) -> Result<(), StoreError> {
        Err(decode_failure())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(decode_failure())
    }
}

/// Sends one request through the router and decodes the JSON response body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = service_core::axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: mongodb::Client,
    pub db_name: String,
}

impl TestApp {
    /// Spawns the service against a live MongoDB using a throwaway database.
    pub async fn spawn() -> Self {
        let db_name = format!("profile_test_{}", Uuid::new_v4().simple());
        let mongo_uri = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let mut config = config::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.store = service_core::config::StoreBackend::Mongo;
        config.mongodb.uri = mongo_uri.clone();
        config.mongodb.database = db_name.clone();

        let app = Application::build::<Profile>(SERVICE_NAME, &config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let http = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if http.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        let client = mongodb::Client::with_uri_str(&mongo_uri)
            .await
            .expect("Failed to create MongoDB client");

        TestApp {
            address,
            port,
            client,
            db_name,
        }
    }

    /// Cleanup test database after test completes.
    pub async fn cleanup(&self) {
        let _ = self.client.database(&self.db_name).drop(None).await;
    }
}
