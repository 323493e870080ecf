//! Tenantry Server Library
//!
//! REST API for administering organizations (tenants) and their users.
//!
//! # Architecture
//!
//! The HTTP layer is a thin delegation layer in vertical slices:
//!
//! - **Commands** (create, update, deregister, reregister, create user) go to
//!   the write services, [`services::OrganizationsService`] and
//!   [`services::UsersService`]
//! - **Queries** (list, get, list users) go to the read services,
//!   [`services::OrganizationsReadService`] and [`services::UsersReadService`]
//!
//! Every handler authorizes the [`auth::Principal`] first, validates the
//! request second, and only then calls a service. Rejected requests never
//! reach a service.
//!
//! ## Framework Stack
//!
//! - **Axum**: routing and extraction
//! - **Tower / tower-http**: CORS and request tracing layers
//! - **Tokio**: runtime, signals, in-memory store locking
//!
//! # Example
//!
//! ```no_run
//! use tenantry_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config, api::AppState::in_memory()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod services;

pub use error::AppError;
