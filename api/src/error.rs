//! Unified error types for the delivery API
//!
//! This module defines error types for each layer:
//! - `DomainError`: repository and business rule errors
//! - `AppError`: application layer errors (wraps domain errors for HTTP responses)
//!
//! Field validation failures live in `domain::validation::FormatError` and
//! travel through `DomainError::Validation`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::FormatError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Validation error: {0}")]
    Validation(#[from] FormatError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(err: sea_orm::DbErr) -> Self {
        // Row vanished between the read and the write of an update
        if matches!(err, sea_orm::DbErr::RecordNotUpdated) {
            return DomainError::NotFound("record no longer exists".to_string());
        }

        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                DomainError::UniqueViolation(detail)
            }
            _ => DomainError::Database(err.to_string()),
        }
    }
}

/// Application layer errors - used by services and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<FormatError> for AppError {
    fn from(e: FormatError) -> Self {
        AppError::Domain(DomainError::Validation(e))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, Option<String>, Option<&'static str>) {
        match self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()), None)
            }
            AppError::Domain(DomainError::Validation(e)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(e.to_string()),
                Some(e.field()),
            ),
            AppError::Domain(DomainError::UniqueViolation(msg)) => {
                tracing::warn!("Unique constraint violation: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()), None)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, field) = self.parts();

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            field,
        });

        (status, body).into_response()
    }
}
