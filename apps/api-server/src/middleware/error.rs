//! Error handling - maps failures onto status codes.
//!
//! Not-found and create-validation failures answer with an empty body;
//! everything else answers with an RFC 7807 body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use bloglist_core::{DomainError, RepoError};
use bloglist_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unknown endpoint")]
    UnknownEndpoint,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::UnknownEndpoint => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            AppError::NotFound => builder.finish(),
            AppError::Validation(msg) => {
                tracing::debug!("Rejected payload: {}", msg);
                builder.finish()
            }
            AppError::BadRequest(detail) => builder.json(ErrorResponse::bad_request(detail)),
            AppError::UnknownEndpoint => builder.json(ErrorResponse::not_found("unknown endpoint")),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                builder.json(ErrorResponse::internal_error())
            }
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::MalformedId(_) => AppError::BadRequest("malformatted id".to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database unavailable".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
