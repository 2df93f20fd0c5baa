use sc_config::Config;
use sc_db::DatabaseGateway;
use sc_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to read .env: {e}");
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting sc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // The store is opened by the first request that needs it
    let gateway = DatabaseGateway::new(
        config.database.url.clone(),
        config.database.max_connections,
    );
    let app_state = AppState::new(gateway);
    let gateway = app_state.gateway.clone();

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    gateway.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Server will only stop when the process is killed");
            std::future::pending::<()>().await;
        }
    }
}
