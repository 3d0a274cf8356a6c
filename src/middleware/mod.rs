//! Request/response processing middleware.
//!
//! Three middleware functions wrap the router: request logging, error-context
//! stamping (request path and method on the error envelope), and security headers.
//! CORS, compression, rate limiting, and the body size limit come from tower-http,
//! tower_governor, and axum layers configured in [`crate::router`].

pub mod context;
pub mod log;
pub mod security;
