//! Application startup and lifecycle management.
//!
//! Connects the store, assembles the resource routes with the operational
//! endpoints (health, readiness, metrics) and serves them until shutdown.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::config::{GatewayConfig, StoreBackend};
use crate::database::MongoDb;
use crate::error::AppError;
use crate::middleware::{REQUEST_ID_HEADER, metrics_middleware, request_id_middleware};
use crate::observability::get_metrics;
use crate::resource::{self, GatewayState, InMemoryStore, MongoStore, Resource, ResourceStore};

/// Health check endpoint for Docker/K8s liveness probes.
async fn health_check<R: Resource>(State(state): State<GatewayState<R>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": state.service,
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check endpoint; ready only while the store answers a ping.
async fn readiness_check<R: Resource>(
    State(state): State<GatewayState<R>>,
) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}

/// Prometheus metrics endpoint.
async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

/// Full router for one gateway: resource routes plus operational endpoints.
pub fn build_router<R: Resource>(
    service: &'static str,
    store: Arc<dyn ResourceStore<R>>,
) -> Router {
    let state = GatewayState::new(service, store);

    Router::new()
        .route("/health", get(health_check::<R>))
        .route("/ready", get(readiness_check::<R>))
        .route("/metrics", get(metrics_endpoint))
        .merge(resource::routes::<R>())
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}

/// Opens the configured store for `R`.
///
/// For MongoDB the server must answer a ping; there is no retry.
pub async fn connect_store<R: Resource>(
    config: &GatewayConfig,
) -> Result<Arc<dyn ResourceStore<R>>, AppError> {
    match config.store {
        StoreBackend::Memory => {
            tracing::warn!(
                resource = R::PLURAL,
                "Using in-memory store - records are lost on restart"
            );
            Ok(Arc::new(InMemoryStore::<R>::new()))
        }
        StoreBackend::Mongo => {
            let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to connect to MongoDB: {}", e);
                    AppError::from(e)
                })?;
            db.ping().await.map_err(|e| {
                tracing::error!("MongoDB did not answer ping: {}", e);
                AppError::from(e)
            })?;

            tracing::info!(
                database = %config.mongodb.database,
                collection = %config.mongodb.collection,
                "Connected to MongoDB"
            );

            Ok(Arc::new(MongoStore::<R>::new(&db, &config.mongodb.collection)))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Connect the configured store and bind the listener (port 0 = random port for testing).
    pub async fn build<R: Resource>(
        service: &'static str,
        config: &GatewayConfig,
    ) -> Result<Self, AppError> {
        let store = connect_store::<R>(config).await?;
        Self::with_store(service, config.common.port, store).await
    }

    /// Bind the listener around an already opened store.
    pub async fn with_store<R: Resource>(
        service: &'static str,
        port: u16,
        store: Arc<dyn ResourceStore<R>>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(service = service, "Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(service, store),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
