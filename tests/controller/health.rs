//! Tests for the health probe endpoints.
//!
//! Verifies the deep health check, readiness, and liveness probes against a
//! reachable database and against a closed connection pool.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use ggrepo::{controller::health, model::app::AppState};
use ggrepo_test_utils::prelude::*;

/// Reads a JSON body from a finished response.
async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tests the deep health check with a reachable database.
///
/// Expected: 200 OK with status "healthy" and a connected database section.
#[tokio::test]
async fn health_reports_healthy_when_database_reachable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = health::health(State(test.into_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "connected");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Tests the deep health check once the connection pool is closed.
///
/// Expected: 503 Service Unavailable with a disconnected database section.
#[tokio::test]
async fn health_reports_unhealthy_when_database_closed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let state: AppState = test.into_app_state();

    test.db.clone().close().await?;

    let resp = health::health(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["error"], "Database connection failed");
    assert_eq!(body["database"]["status"], "disconnected");
    assert!(body["database"]["responseTime"].is_null());

    Ok(())
}

/// Tests the readiness probe with a reachable database.
///
/// Expected: 200 OK with status "ready" and no error field.
#[tokio::test]
async fn ready_when_database_reachable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = health::ready(State(test.into_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "ready");

    Ok(())
}

/// Tests the readiness probe once the connection pool is closed.
///
/// Expected: 503 Service Unavailable with status "not ready" and an error message.
#[tokio::test]
async fn not_ready_when_database_closed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let state: AppState = test.into_app_state();

    test.db.clone().close().await?;

    let resp = health::ready(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "not ready");
    assert_eq!(body["error"], "Database not available");

    Ok(())
}

/// Tests that the liveness probe never consults the database.
///
/// Expected: 200 OK with status "alive" even with the pool closed.
#[tokio::test]
async fn live_succeeds_with_database_closed() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.into_app_state();

    test.db.clone().close().await?;

    let resp = health::live(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "alive");

    Ok(())
}
