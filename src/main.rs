use std::net::SocketAddr;

use ggrepo::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config);

    // A panic outside a request handler leaves the process in an unknown
    // state; log it with full context and bail out.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Unhandled panic: {info}");
        default_hook(info);
        std::process::exit(1);
    }));

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("Failed to initialize database: {err}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(db.clone(), config.environment);
    let app = router::routes(state, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = config.port,
        environment = config.environment.as_str(),
        "Server listening"
    );

    // Peer addresses are recorded so the rate limiter can key on client IP
    // when no forwarding headers are present.
    if let Err(err) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await
    {
        tracing::error!("Server error: {err}");
    }

    if let Err(err) = db.close().await {
        tracing::error!("Failed to close database connection: {err}");
    }

    tracing::info!("Graceful shutdown completed");
}
