//! Error-context middleware.
//!
//! [`AppError::into_response`](crate::error::AppError) cannot see the request, so it
//! attaches its classified [`ErrorParts`] to the response as an extension. This
//! middleware rebuilds the error envelope with the request path and method filled in,
//! and decides whether the error chain may be shown (5xx only, never in production).

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::{
    error::ErrorParts,
    model::{
        api::{ErrorBodyDto, ErrorEnvelopeDto},
        app::AppState,
    },
};

pub async fn error_context(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let Some(error) = response.extensions().get::<ErrorParts>().cloned() else {
        return response;
    };

    let show_stack = error.status.is_server_error() && !state.environment.is_production();

    let body = ErrorEnvelopeDto {
        error: ErrorBodyDto {
            message: error.message,
            code: error.code,
            timestamp: Utc::now(),
            path: Some(path),
            method: Some(method),
            details: error.details,
            error_id: error.error_id,
            stack: if show_stack { error.stack } else { None },
        },
    };

    // Swap in the rebuilt envelope while keeping the headers that layers
    // between here and the handler already stamped on the response.
    let (mut head, _) = response.into_parts();
    let (json_head, json_body) = Json(body).into_response().into_parts();

    head.status = error.status;
    head.headers.remove(header::CONTENT_LENGTH);
    for (name, value) in &json_head.headers {
        head.headers.insert(name, value.clone());
    }
    head.extensions.remove::<ErrorParts>();

    Response::from_parts(head, json_body)
}
