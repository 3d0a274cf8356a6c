//! HTTP controller endpoints for the ggrepo API.
//!
//! Axum handlers for the health probes and the versioned API surface. Controllers
//! handle HTTP requests, interact with the database through the application state,
//! and return enveloped responses. Endpoints are annotated with utoipa for OpenAPI
//! documentation.

pub mod api;
pub mod health;
