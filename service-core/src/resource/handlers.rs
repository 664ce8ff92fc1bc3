//! HTTP handlers for the resource routes.
//!
//! Each handler performs exactly one store call. Store failures are logged here
//! and converted to the fixed-message [`AppError`] variants.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use super::{GatewayState, Resource};
use crate::error::AppError;

/// List every record of the collection.
pub async fn list_resources<R: Resource>(
    State(state): State<GatewayState<R>>,
) -> Result<Json<Vec<R>>, AppError> {
    let records = state.store.list().await.map_err(|e| {
        tracing::error!(error = %e, resource = R::PLURAL, "Failed to list records");
        AppError::ListFailed {
            entities: R::PLURAL,
        }
    })?;

    tracing::debug!(resource = R::PLURAL, count = records.len(), "Listed records");

    Ok(Json(records))
}

/// Fetch the record whose key field matches the path segment.
///
/// A lookup failure is reported to the caller the same way as a missing record.
pub async fn get_resource<R: Resource>(
    State(state): State<GatewayState<R>>,
    Path(key): Path<String>,
) -> Result<Json<R>, AppError> {
    let not_found = AppError::NotFound {
        entity: R::SINGULAR,
    };

    match state.store.find_by_key(&key).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => {
            tracing::debug!(resource = R::SINGULAR, key = %key, "Record not found");
            Err(not_found)
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                resource = R::SINGULAR,
                key = %key,
                "Failed to look up record"
            );
            Err(not_found)
        }
    }
}

/// Decode a request body into `R`.
///
/// The body must be a JSON object whatever the declared content type; arrays and
/// scalars are refused even where serde could map them onto the struct.
pub fn decode_body<R: Resource>(body: &[u8]) -> Result<R, String> {
    let value: Value = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err(format!("expected a JSON object, got {}", json_kind(&value)));
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Insert the request body as a new record and echo it back.
pub async fn create_resource<R: Resource>(
    State(state): State<GatewayState<R>>,
    body: Bytes,
) -> Result<(StatusCode, Json<R>), AppError> {
    let record = decode_body::<R>(&body).map_err(|reason| {
        tracing::warn!(resource = R::SINGULAR, reason = %reason, "Rejected request body");
        AppError::InvalidInput
    })?;

    state.store.insert(&record).await.map_err(|e| {
        tracing::error!(
            error = %e,
            resource = R::SINGULAR,
            key = %record.key(),
            "Failed to insert record"
        );
        AppError::InsertFailed {
            entity: R::SINGULAR,
        }
    })?;

    tracing::info!(resource = R::SINGULAR, key = %record.key(), "Created record");

    Ok((StatusCode::CREATED, Json(record)))
}
