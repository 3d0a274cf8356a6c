//! Request logging middleware.
//!
//! Logs one line per completed request with method, path, status, and latency.
//! Health probe traffic is skipped to keep the logs readable under frequent
//! orchestrator polling.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    if !path.starts_with("/health") {
        tracing::info!(
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            latency_ms = start.elapsed().as_millis() as u64,
            "request"
        );
    }

    response
}
