//! Tests for the versioned API endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use ggrepo::{controller::api, model::app::AppState};
use ggrepo_test_utils::prelude::*;

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tests the static API description.
///
/// Expected: 200 OK with a success envelope pointing at the health and docs paths.
#[tokio::test]
async fn info_returns_success_envelope() {
    let resp = api::info().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "API information retrieved successfully");
    assert_eq!(body["data"]["name"], "ggrepo API");
    assert_eq!(body["data"]["endpoints"]["health"], "/health");
    assert_eq!(body["data"]["documentation"]["swagger"], "/api/v1/docs");
    assert!(body["timestamp"].is_string());
}

/// Tests the operational status endpoint.
///
/// Expected: 200 OK with api "operational" and the state's environment.
#[tokio::test]
async fn status_reports_operational() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = api::status(State(test.into_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["api"], "operational");
    assert_eq!(body["data"]["environment"], "test");
    assert!(body["data"]["uptime"].is_u64());

    Ok(())
}
