pub mod extract;
pub mod response;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;

use crate::config::Config;
use crate::features;
use crate::middleware;
use crate::services::{
    InMemoryDirectory, OrganizationsReadService, OrganizationsService, UsersReadService,
    UsersService,
};

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub organizations: Arc<dyn OrganizationsService>,
    pub organizations_read: Arc<dyn OrganizationsReadService>,
    pub users: Arc<dyn UsersService>,
    pub users_read: Arc<dyn UsersReadService>,
}

impl AppState {
    pub fn new(
        organizations: Arc<dyn OrganizationsService>,
        organizations_read: Arc<dyn OrganizationsReadService>,
        users: Arc<dyn UsersService>,
        users_read: Arc<dyn UsersReadService>,
    ) -> Self {
        Self {
            organizations,
            organizations_read,
            users,
            users_read,
        }
    }

    /// Every service backed by one [`InMemoryDirectory`]
    pub fn in_memory() -> Self {
        let directory = Arc::new(InMemoryDirectory::new());
        Self::new(
            directory.clone(),
            directory.clone(),
            directory.clone(),
            directory,
        )
    }
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(features::router())
        .with_state(state)
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Bind the configured address and serve until a shutdown signal arrives
pub async fn serve(config: Config, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state, &config);

    let addr: SocketAddr = config.bind_address().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, starting graceful shutdown");
        },
    }

    tracing::info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}
