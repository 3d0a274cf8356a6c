//! Application state shared across all request handlers.

use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::config::AppEnvironment;

/// Application state containing shared resources.
///
/// Initialized once during startup and cloned cheaply for each request via Axum's
/// state extraction. The database connection is a pool; clones share it. There is
/// deliberately no global, lazily-initialized handle anywhere: the pool is built in
/// `main` and owned by this struct.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Deployment environment, used for error rendering and CORS decisions.
    pub environment: AppEnvironment,

    /// Process start time, reported by the health endpoints.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(db: DatabaseConnection, environment: AppEnvironment) -> Self {
        Self {
            db,
            environment,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the process started serving.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Conversion used by integration tests to build state around a test database.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, AppEnvironment::Test)
    }
}
