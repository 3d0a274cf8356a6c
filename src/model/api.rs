//! Uniform response envelope types.
//!
//! Every endpoint responds with one of two wrapper shapes: the success envelope
//! (`success: true` plus optional data, message, and pagination meta) or the error
//! envelope (a single `error` object carrying message, code, timestamp, and request
//! context). Builders on [`ApiResponse`] keep handlers terse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The uniform success envelope returned by all endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true` for this envelope.
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMetaDto>,
}

impl<T> ApiResponse<T> {
    /// Envelope with data and no message.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now(),
            meta: None,
        }
    }

    /// Envelope with data and a human-readable message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }

    /// Envelope for a list endpoint with pagination metadata.
    pub fn paginated(data: T, page: u64, limit: u64, total: u64) -> Self {
        Self {
            meta: Some(PageMetaDto::new(page, limit, total)),
            ..Self::success(data)
        }
    }
}

/// Pagination metadata for list endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetaDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PageMetaDto {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit.max(1)),
        }
    }
}

/// The uniform error envelope returned by all endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelopeDto {
    pub error: ErrorBodyDto,
}

/// Body of the error envelope.
///
/// `path` and `method` are stamped by the error-context middleware; `errorId` and
/// `stack` appear only on 5xx responses, and `stack` never in production.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorBodyDto {
    pub message: String,
    pub code: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldErrorDto>>,
    #[serde(rename = "errorId", skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// One invalid field in a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
    pub code: String,
}

/// The 404 fallback body for unmatched routes.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RouteNotFoundDto {
    pub error: String,
    pub path: String,
    pub method: String,
}
