use nr_auth::{CredentialHasher, HasherParams};
use nr_config::Config;
use nr_core::IdentityStore;
use nr_db::NurseRepository;
use nr_server::{AppState, build_router, logger, seed_nurses};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Optional .env for NR_* overrides
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting nr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database pool + migrations
    let database_path = config.database_path()?;
    let pool = nr_db::connect(&database_path).await?;
    let store: Arc<dyn IdentityStore> = Arc::new(NurseRepository::new(pool.clone()));

    let hasher = CredentialHasher::new(HasherParams {
        memory_kib: config.hasher.memory_kib,
        iterations: config.hasher.iterations,
        parallelism: config.hasher.parallelism,
    })?;

    let app_state = AppState::new(store, hasher, &config.session.cookie_name);

    if let Some(seed_path) = config.seed_path()? {
        match seed_nurses(&app_state, &seed_path).await {
            Ok(report) => info!(
                "Seed import finished: {} imported, {} skipped",
                report.imported, report.skipped
            ),
            Err(e) => error!("Failed to import nurses from {}: {}", seed_path.display(), e),
        }
    }

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Graceful shutdown unavailable; stop the process to exit");
            std::future::pending::<()>().await;
        }
    }
}
