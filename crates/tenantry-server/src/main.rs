//! Tenantry Server - Main entry point

use anyhow::Result;
use tenantry_common::logging::{init_logging, LogConfig};
use tracing::info;

use tenantry_server::{
    api::{self, AppState},
    config::Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("tenantry-server")
        .filter_directives("tenantry_server=debug,tower_http=debug,axum=info")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    info!("Starting Tenantry Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}",
        config.bind_address()
    );

    let state = AppState::in_memory();
    info!("Using in-memory organization directory");

    api::serve(config, state).await
}
