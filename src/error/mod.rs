//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion logic that
//! turns errors into the uniform JSON error envelope. `AppError` is the top-level error
//! type; it implements `IntoResponse` so handlers can return `Result<_, AppError>` and
//! rely on automatic mapping to HTTP status codes.
//!
//! Database errors are classified by constraint: unique violations map to 409 Conflict,
//! foreign key and not-null violations to 400 Bad Request, everything else to 500. The
//! request path and method of the envelope are stamped by the error-context middleware
//! (see [`crate::middleware::context`]), since `IntoResponse` has no access to the request.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    error::config::ConfigError,
    model::api::{ErrorBodyDto, ErrorEnvelopeDto, FieldErrorDto},
};

/// Machine-readable error code for validation failures.
pub static CODE_VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Machine-readable error code for unique constraint violations.
pub static CODE_DUPLICATE_RESOURCE: &str = "DUPLICATE_RESOURCE";
/// Machine-readable error code for foreign key constraint violations.
pub static CODE_FOREIGN_KEY_VIOLATION: &str = "FOREIGN_KEY_VIOLATION";
/// Machine-readable error code for not-null constraint violations.
pub static CODE_NOT_NULL_VIOLATION: &str = "NOT_NULL_VIOLATION";
/// Machine-readable error code for missing resources.
pub static CODE_NOT_FOUND: &str = "NOT_FOUND";
/// Machine-readable error code for malformed requests.
pub static CODE_BAD_REQUEST: &str = "BAD_REQUEST";
/// Machine-readable error code for everything that should not leak details.
pub static CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Top-level application error type.
///
/// Aggregates configuration, validation, database, and generic errors. Most variants
/// use `#[from]` for automatic conversion via the `?` operator.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal during startup; should it ever escape into a request it renders
    /// as a generic 500 without leaking configuration details.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    /// Request payload validation failure with one entry per invalid field.
    ///
    /// Results in 400 Bad Request with a `details` array in the envelope.
    #[error("Validation failed")]
    ValidationError(Vec<FieldErrorDto>),

    /// Database operation error from SeaORM.
    ///
    /// Classified by constraint kind: unique violation becomes 409 Conflict,
    /// foreign key and not-null violations become 400 Bad Request, anything
    /// else is a 500 with details logged server-side only.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with a message for server-side logging.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<FieldErrorDto> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |err| FieldErrorDto {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}")),
                    code: err.code.to_string(),
                })
            })
            .collect();

        // Deterministic ordering for clients and tests.
        details.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::ValidationError(details)
    }
}

/// The classified pieces of an error response.
///
/// Attached to the response as an extension by [`AppError::into_response`] so the
/// error-context middleware can rebuild the envelope with request path and method,
/// and decide whether the stack may be shown.
#[derive(Debug, Clone)]
pub struct ErrorParts {
    pub status: StatusCode,
    pub message: String,
    pub code: String,
    pub details: Option<Vec<FieldErrorDto>>,
    /// Correlation id, present only for 5xx responses.
    pub error_id: Option<String>,
    /// Full error chain, present only for 5xx. Never rendered in production.
    pub stack: Option<String>,
}

impl AppError {
    /// Classify this error into status code, client message, and error code.
    pub fn parts(&self) -> ErrorParts {
        let (status, code, message, details) = match self {
            AppError::ValidationError(details) => (
                StatusCode::BAD_REQUEST,
                CODE_VALIDATION_ERROR,
                "Validation failed".to_string(),
                Some(details.clone()),
            ),
            AppError::DbErr(err) => {
                let (status, code, message) = classify_db_err(err);
                (status, code, message.to_string(), None)
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                CODE_NOT_FOUND,
                message.clone(),
                None,
            ),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                CODE_BAD_REQUEST,
                message.clone(),
                None,
            ),
            AppError::ConfigError(_) | AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                CODE_INTERNAL_ERROR,
                "Internal Server Error".to_string(),
                None,
            ),
        };

        let server_error = status.is_server_error();

        ErrorParts {
            status,
            message,
            code: code.to_string(),
            details,
            error_id: server_error.then(new_error_id),
            stack: server_error.then(|| error_chain(self)),
        }
    }
}

/// Map a SeaORM error to status, code, and client message by constraint kind.
///
/// SeaORM surfaces unique and foreign key violations through [`DbErr::sql_err`];
/// not-null violations are only visible through the PostgreSQL SQLSTATE (23502)
/// in the error text.
fn classify_db_err(err: &DbErr) -> (StatusCode, &'static str, &'static str) {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => (
            StatusCode::CONFLICT,
            CODE_DUPLICATE_RESOURCE,
            "Resource already exists",
        ),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => (
            StatusCode::BAD_REQUEST,
            CODE_FOREIGN_KEY_VIOLATION,
            "Referenced resource not found",
        ),
        _ => {
            let text = err.to_string();
            if text.contains("23502") || text.to_ascii_lowercase().contains("not null") {
                (
                    StatusCode::BAD_REQUEST,
                    CODE_NOT_NULL_VIOLATION,
                    "Required field missing",
                )
            } else {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CODE_INTERNAL_ERROR,
                    "Internal Server Error",
                )
            }
        }
    }
}

/// Generate a correlation id of the form `error-<millis>-<random>`.
fn new_error_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();

    format!(
        "error-{}-{}",
        Utc::now().timestamp_millis(),
        suffix.to_lowercase()
    )
}

/// Render the full error chain, one `caused by:` line per source.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }

    out
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let parts = self.parts();

        if parts.status.is_server_error() {
            tracing::error!(
                error_id = parts.error_id.as_deref().unwrap_or_default(),
                status = parts.status.as_u16(),
                "{self}"
            );
        } else {
            tracing::debug!(status = parts.status.as_u16(), "{self}");
        }

        let body = ErrorEnvelopeDto {
            error: ErrorBodyDto {
                message: parts.message.clone(),
                code: parts.code.clone(),
                timestamp: Utc::now(),
                path: None,
                method: None,
                details: parts.details.clone(),
                error_id: parts.error_id.clone(),
                stack: None,
            },
        };

        let mut response = (parts.status, Json(body)).into_response();
        response.extensions_mut().insert(parts);

        response
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::{DbErr, RuntimeErr};
    use validator::{ValidationError, ValidationErrors};

    use super::*;

    /// Expect 404 with the provided message for NotFound.
    #[test]
    fn not_found_maps_to_404() {
        let parts = AppError::NotFound("User not found".to_string()).parts();

        assert_eq!(parts.status, StatusCode::NOT_FOUND);
        assert_eq!(parts.code, CODE_NOT_FOUND);
        assert_eq!(parts.message, "User not found");
        assert!(parts.error_id.is_none());
        assert!(parts.stack.is_none());
    }

    /// Expect 400 with the provided message for BadRequest.
    #[test]
    fn bad_request_maps_to_400() {
        let parts = AppError::BadRequest("bad input".to_string()).parts();

        assert_eq!(parts.status, StatusCode::BAD_REQUEST);
        assert_eq!(parts.code, CODE_BAD_REQUEST);
    }

    /// Expect a generic message, an error id, and a stack for internal errors.
    #[test]
    fn internal_error_hides_details_and_carries_id() {
        let parts = AppError::InternalError("secret detail".to_string()).parts();

        assert_eq!(parts.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(parts.message, "Internal Server Error");
        let error_id = parts.error_id.expect("5xx must carry an error id");
        assert!(error_id.starts_with("error-"));
        assert!(parts.stack.expect("5xx must carry a stack").contains("secret detail"));
    }

    /// Expect validation errors to produce one detail entry per failing field.
    #[test]
    fn validation_errors_become_field_details() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("email"));
        errors.add("password", ValidationError::new("length"));

        let parts = AppError::from(errors).parts();

        assert_eq!(parts.status, StatusCode::BAD_REQUEST);
        assert_eq!(parts.code, CODE_VALIDATION_ERROR);
        let details = parts.details.expect("validation errors must carry details");
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].field, "email");
        assert_eq!(details[0].code, "email");
        assert_eq!(details[1].field, "password");
    }

    /// Expect a not-null violation reported via SQLSTATE text to map to 400.
    #[test]
    fn not_null_violation_maps_to_400() {
        let err = DbErr::Query(RuntimeErr::Internal(
            "error returned from database: null value in column \"password\" violates \
             not-null constraint (SQLSTATE 23502)"
                .to_string(),
        ));

        let (status, code, _) = classify_db_err(&err);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, CODE_NOT_NULL_VIOLATION);
    }

    /// Expect unknown database errors to map to 500 without leaking the message.
    #[test]
    fn unknown_db_error_maps_to_500() {
        let err = DbErr::Custom("connection reset".to_string());

        let parts = AppError::DbErr(err).parts();

        assert_eq!(parts.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(parts.message, "Internal Server Error");
    }
}
