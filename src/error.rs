//! Error types for the Biblioteca server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate value: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(mongodb::error::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for client and server faults
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Structured notice returned when an operation target does not exist,
/// and as the confirmation body for deletes
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        // E11000: a unique index rejected the write, the client sent a duplicate
        if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
            if write_error.code == 11000 {
                return AppError::Duplicate(write_error.message.clone());
            }
        }
        AppError::Database(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::Internal(format!("BSON serialization failed: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse { message })).into_response()
            }
            AppError::Validation(error) | AppError::Duplicate(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::Internal(error) => {
                tracing::error!("Internal error: {}", error);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error })).into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
