//! Feature modules implementing the Tenantry API
//!
//! Each feature is a vertical slice:
//! - `commands/` - write operations, delegated to the write services
//! - `queries/` - read operations, delegated to the read services
//! - `routes.rs` - HTTP route definitions
//!
//! Command and query handlers authorize the principal first, then validate
//! the request, and only then call a service.
//!
//! # Features
//!
//! - **organizations**: tenant registration, updates and lifecycle
//! - **users**: members of an organization

pub mod organizations;
pub mod shared;
pub mod users;

use axum::Router;

use crate::api::AppState;

/// All feature routes, paths already prefixed with `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(organizations::organizations_routes())
        .merge(users::users_routes())
}
