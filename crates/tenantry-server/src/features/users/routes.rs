//! User API routes, nested under an organization
//!
//! - `GET /api/organizations/:organization_id/users` - List users (admin or member)
//! - `POST /api/organizations/:organization_id/users` - Create a user (admin)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::{commands::CreateUserCommand, queries::ListUsersQuery};
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::AppState;
use crate::auth::Principal;
use crate::error::AppError;

pub fn users_routes() -> Router<AppState> {
    Router::new().route(
        "/api/organizations/:organization_id/users",
        get(list_users).post(create_user),
    )
}

/// `POST /api/organizations/:organization_id/users` - 201 with the new user id
///
/// The admin check runs before the body is inspected.
#[tracing::instrument(skip(state, principal, body), fields(user_id = %principal.user_id))]
async fn create_user(
    principal: Principal,
    State(state): State<AppState>,
    ApiPath(organization_id): ApiPath<Uuid>,
    body: Result<ApiJson<CreateUserCommand>, AppError>,
) -> Result<Response, AppError> {
    principal.require_admin()?;
    let ApiJson(mut command) = body?;
    command.organization_id = organization_id;

    let id = super::commands::create::handle(state.users.as_ref(), &principal, command).await?;

    Ok((StatusCode::CREATED, Json(id)).into_response())
}

#[tracing::instrument(skip(state, principal), fields(user_id = %principal.user_id))]
async fn list_users(
    principal: Principal,
    State(state): State<AppState>,
    ApiPath(organization_id): ApiPath<Uuid>,
) -> Result<Response, AppError> {
    let query = ListUsersQuery { organization_id };

    let users = super::queries::list::handle(state.users_read.as_ref(), &principal, query).await?;

    Ok((StatusCode::OK, Json(users)).into_response())
}
