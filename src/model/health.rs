//! Health probe response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Deep health check response for `GET /health`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// `healthy` or `unhealthy`.
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the process started.
    pub uptime: u64,
    pub environment: String,
    pub version: String,
    pub database: DatabaseHealthDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryDto>,
    pub system: SystemDto,
}

/// Degraded health check response, returned with 503.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UnhealthyDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub error: String,
    pub database: DatabaseHealthDto,
}

/// Database connectivity section of the deep health check.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealthDto {
    /// `connected` or `disconnected`.
    pub status: String,
    /// Round-trip latency of the probe query, e.g. `3ms`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
}

/// Process memory usage in mebibytes.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoryDto {
    pub resident_mb: u64,
    pub virtual_mb: u64,
}

/// Host process details.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SystemDto {
    pub platform: String,
    pub arch: String,
}

/// Readiness probe response for `GET /health/ready`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReadinessDto {
    /// `ready` or `not ready`.
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Liveness probe response for `GET /health/live`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LivenessDto {
    /// Always `alive`.
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub uptime: u64,
}
