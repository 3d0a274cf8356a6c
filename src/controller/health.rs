//! Health probe endpoints.
//!
//! Three probes with standard semantics: `/health` is the deep check (database
//! round-trip plus process metadata), `/health/ready` answers "able to serve"
//! with the same query and a minimal body, and `/health/live` answers "process
//! is running" without touching any dependency.

use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::{
    model::{
        app::AppState,
        health::{
            DatabaseHealthDto, HealthDto, LivenessDto, ReadinessDto, SystemDto, UnhealthyDto,
        },
    },
    util::system,
};

pub static HEALTH_TAG: &str = "health";

/// Probe latency above which a warning is logged.
const SLOW_QUERY_THRESHOLD: Duration = Duration::from_secs(1);

/// Run the trivial probe query and measure its round-trip latency.
async fn probe_database(db: &DatabaseConnection) -> Result<Duration, DbErr> {
    let start = Instant::now();
    db.execute_unprepared("SELECT 1").await?;

    Ok(start.elapsed())
}

/// Deep health check: database round trip plus process metadata
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service healthy, database reachable", body = HealthDto),
        (status = 503, description = "Database unreachable", body = UnhealthyDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Response {
    match probe_database(&state.db).await {
        Ok(latency) => {
            if latency > SLOW_QUERY_THRESHOLD {
                tracing::warn!(
                    response_time_ms = latency.as_millis() as u64,
                    "Database response time is slow"
                );
            }

            (
                StatusCode::OK,
                Json(HealthDto {
                    status: "healthy".to_string(),
                    timestamp: Utc::now(),
                    uptime: state.uptime_secs(),
                    environment: state.environment.as_str().to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    database: DatabaseHealthDto {
                        status: "connected".to_string(),
                        response_time: Some(format!("{}ms", latency.as_millis())),
                    },
                    memory: system::process_memory(),
                    system: SystemDto {
                        platform: std::env::consts::OS.to_string(),
                        arch: std::env::consts::ARCH.to_string(),
                    },
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Health check failed: {err}");

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyDto {
                    status: "unhealthy".to_string(),
                    timestamp: Utc::now(),
                    error: "Database connection failed".to_string(),
                    database: DatabaseHealthDto {
                        status: "disconnected".to_string(),
                        response_time: None,
                    },
                }),
            )
                .into_response()
        }
    }
}

/// Readiness probe: database round trip without the extra metadata
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Ready to serve traffic", body = ReadinessDto),
        (status = 503, description = "Database unavailable", body = ReadinessDto)
    ),
)]
pub async fn ready(State(state): State<AppState>) -> Response {
    match probe_database(&state.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ReadinessDto {
                status: "ready".to_string(),
                timestamp: Utc::now(),
                error: None,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Readiness check failed: {err}");

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessDto {
                    status: "not ready".to_string(),
                    timestamp: Utc::now(),
                    error: Some("Database not available".to_string()),
                }),
            )
                .into_response()
        }
    }
}

/// Liveness probe: touches no external dependency
#[utoipa::path(
    get,
    path = "/health/live",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Process is running", body = LivenessDto)
    ),
)]
pub async fn live(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessDto {
            status: "alive".to_string(),
            timestamp: Utc::now(),
            uptime: state.uptime_secs(),
        }),
    )
}
