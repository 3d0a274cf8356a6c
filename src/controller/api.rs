//! Versioned API surface.
//!
//! `/api/v1` returns static service metadata and `/api/v1/status` a small
//! operational summary. No entity operations are exposed here.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::ApiResponse, app::AppState};

pub static API_TAG: &str = "api";

/// Static API description returned by `GET /api/v1`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiInfoDto {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: EndpointsDto,
    pub documentation: DocumentationDto,
}

/// Advertised endpoint paths.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct EndpointsDto {
    pub health: String,
    pub api: String,
}

/// Advertised documentation paths.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DocumentationDto {
    pub openapi: String,
    pub swagger: String,
}

/// Operational summary returned by `GET /api/v1/status`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiStatusDto {
    pub api: String,
    pub uptime: u64,
    pub environment: String,
}

/// API information
#[utoipa::path(
    get,
    path = "/api/v1",
    tag = API_TAG,
    responses(
        (status = 200, description = "Static API description", body = ApiResponse<ApiInfoDto>)
    ),
)]
pub async fn info() -> impl IntoResponse {
    let info = ApiInfoDto {
        name: "ggrepo API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Backend API for the ggrepo devtool".to_string(),
        endpoints: EndpointsDto {
            health: "/health".to_string(),
            api: "/api/v1".to_string(),
        },
        documentation: DocumentationDto {
            openapi: "/api/v1/docs/openapi.json".to_string(),
            swagger: "/api/v1/docs".to_string(),
        },
    };

    (
        StatusCode::OK,
        Json(ApiResponse::with_message(
            info,
            "API information retrieved successfully",
        )),
    )
}

/// API operational status
#[utoipa::path(
    get,
    path = "/api/v1/status",
    tag = API_TAG,
    responses(
        (status = 200, description = "Operational summary", body = ApiResponse<ApiStatusDto>)
    ),
)]
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let status = ApiStatusDto {
        api: "operational".to_string(),
        uptime: state.uptime_secs(),
        environment: state.environment.as_str().to_string(),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::with_message(
            status,
            "API status retrieved successfully",
        )),
    )
}
