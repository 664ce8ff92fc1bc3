use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Error getting {entities}")]
    ListFailed { entities: &'static str },

    #[error("Error inserting {entity}")]
    InsertFailed { entity: &'static str },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

impl AppError {
    /// Status code and caller-facing message for each error class.
    ///
    /// Underlying causes never leave the process; they are logged where the
    /// error is raised.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid input".to_string()),
            AppError::NotFound { entity } => {
                (StatusCode::NOT_FOUND, format!("{} not found", entity))
            }
            AppError::ListFailed { entities } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error getting {}", entities),
            ),
            AppError::InsertFailed { entity } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error inserting {}", entity),
            ),
            AppError::InternalError(_) | AppError::DatabaseError(_) | AppError::ConfigError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let (status, message) = self.status_and_message();

        (status, Json(ErrorResponse { message })).into_response()
    }
}
