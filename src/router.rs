//! HTTP routing, middleware stack, and OpenAPI documentation configuration.
//!
//! All endpoints are registered here with their OpenAPI specifications via utoipa,
//! and Swagger UI serves the interactive documentation at `/api/v1/docs`. The
//! middleware stack is assembled around the routes in a fixed order: request
//! logging outermost, then error-context stamping, security headers, CORS,
//! compression, rate limiting, and the request body size limit innermost.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_governor::{governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    controller,
    middleware::{context, log, security},
    model::{api::RouteNotFoundDto, app::AppState},
};

/// Maximum accepted request body size.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Sliding window over which the per-client request budget applies.
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(900);

/// Service banner returned by `GET /`.
#[derive(Serialize)]
struct BannerDto {
    name: &'static str,
    version: &'static str,
    status: &'static str,
    endpoints: BannerEndpointsDto,
}

#[derive(Serialize)]
struct BannerEndpointsDto {
    health: &'static str,
    api: &'static str,
    docs: &'static str,
}

async fn root() -> impl IntoResponse {
    Json(BannerDto {
        name: "ggrepo API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        endpoints: BannerEndpointsDto {
            health: "/health",
            api: "/api/v1",
            docs: "/api/v1/docs",
        },
    })
}

async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundDto {
            error: "Route not found".to_string(),
            path: uri.path().to_string(),
            method: method.to_string(),
        }),
    )
}

/// CORS policy derived from the runtime configuration.
///
/// Production restricts origins to the configured allowlist; every other
/// environment mirrors the request origin so local frontends on arbitrary
/// ports can talk to the API. Methods and headers are always an explicit
/// list because credentialed requests forbid wildcards.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins = if config.environment.is_production() {
        let list: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        AllowOrigin::list(list)
    } else {
        AllowOrigin::mirror_request()
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Builds the application router with all endpoints, middleware, and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /` - Service banner
/// - `GET /health` - Deep health check (database round trip)
/// - `GET /health/ready` - Readiness probe
/// - `GET /health/live` - Liveness probe
/// - `GET /api/v1` - API description
/// - `GET /api/v1/status` - API operational status
///
/// The OpenAPI specification is served at `/api/v1/docs/openapi.json` and
/// Swagger UI at `/api/v1/docs`. Unmatched paths fall through to a JSON 404.
pub fn routes(state: AppState, config: &Config) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "ggrepo", description = "ggrepo API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Health probe routes"),
        (name = controller::api::API_TAG, description = "Versioned API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::health::ready))
        .routes(routes!(controller::health::live))
        .routes(routes!(controller::api::info))
        .routes(routes!(controller::api::status))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/v1/docs").url("/api/v1/docs/openapi.json", api));

    let burst = config.environment.rate_limit_burst();
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .period(RATE_LIMIT_WINDOW / burst)
            .burst_size(burst)
            .finish()
            .expect("rate limit window and burst size are non-zero"),
    );

    routes
        .route("/", get(root))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(GovernorLayer::new(governor_conf))
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(from_fn_with_state(state.clone(), security::security_headers))
        .layer(from_fn_with_state(state.clone(), context::error_context))
        .layer(axum::middleware::from_fn(log::request_log))
        .with_state(state)
}
