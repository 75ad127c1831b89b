//! Back-office inventory server.
//!
//! Configured through `AGRI_*` environment variables (see [`Config`]); stops gracefully on
//! Ctrl-C.

use agri_inventory::api::{self, AppState};
use agri_inventory::config::Config;
use agri_inventory::lifecycle::{init_tracing, InventorySystem};
use agri_inventory::seed;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    init_tracing(config.log_format);
    info!(?config, "Starting agri-inventory");

    let system = InventorySystem::with_capacity(config.mailbox_capacity);

    if let Some(path) = &config.seed_file {
        seed::load_file(&system, path).await?;
    }

    let app = api::router(AppState::new(system.status_handler(), system.replenisher()));
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
