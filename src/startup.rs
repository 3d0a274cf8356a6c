//! Process startup and shutdown plumbing.
//!
//! Tracing initialization, database connection with migrations, and the
//! graceful-shutdown signal future used by `axum::serve`.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

/// Database pool sizing and timeouts.
const MAX_CONNECTIONS: u32 = 20;
const IDLE_TIMEOUT: Duration = Duration::from_secs(20);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long in-flight requests get to finish once a shutdown signal arrives.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured `LOG_LEVEL` becomes the
/// default filter for the application's own spans.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

/// Connect to the database and run pending migrations.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(MAX_CONNECTIONS)
        .idle_timeout(IDLE_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::info!("Database connection established");

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Resolves when the process receives SIGINT or SIGTERM.
///
/// On the first signal a watchdog task is spawned: if the server has not
/// finished draining within [`SHUTDOWN_TIMEOUT`], the process is terminated
/// so a stuck connection cannot block shutdown indefinitely.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }

    tokio::spawn(async {
        tokio::time::sleep(SHUTDOWN_TIMEOUT).await;
        tracing::error!("Forced shutdown after timeout");
        std::process::exit(1);
    });
}
