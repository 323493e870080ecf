//! Organization API routes
//!
//! # Route Structure
//!
//! - `GET /api/organizations` - List all organizations (admin)
//! - `POST /api/organizations` - Create an organization (admin)
//! - `GET /api/organizations/:organization_id` - Get one organization (admin or member)
//! - `PUT /api/organizations/:organization_id` - Replace organization details (admin)
//! - `DELETE /api/organizations/:organization_id` - Deregister (admin)
//! - `POST /api/organizations/:organization_id` - Reregister (admin)
//!
//! The collection is also mounted with a trailing slash, so a request such as
//! `PUT /api/organizations/` (no id) is answered with 405.
//!
//! Write routes check for the admin role before looking at the body, so a
//! non-admin caller gets 403 even when the body is missing or malformed.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::{
    commands::{
        CreateOrganizationCommand, DeregisterOrganizationCommand, ReregisterOrganizationCommand,
        UpdateOrganizationCommand,
    },
    queries::GetOrganizationQuery,
};
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::AppState;
use crate::auth::Principal;
use crate::error::AppError;

pub fn organizations_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/organizations",
            get(list_organizations).post(create_organization),
        )
        .route(
            "/api/organizations/",
            get(list_organizations).post(create_organization),
        )
        .route(
            "/api/organizations/:organization_id",
            get(get_organization)
                .put(update_organization)
                .delete(deregister_organization)
                .post(reregister_organization),
        )
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `POST /api/organizations` - 201 with the new id as the body
#[tracing::instrument(skip(state, principal, body), fields(user_id = %principal.user_id))]
async fn create_organization(
    principal: Principal,
    State(state): State<AppState>,
    body: Result<ApiJson<CreateOrganizationCommand>, AppError>,
) -> Result<Response, AppError> {
    principal.require_admin()?;
    let ApiJson(command) = body?;

    let id =
        super::commands::create::handle(state.organizations.as_ref(), &principal, command).await?;

    Ok((StatusCode::CREATED, Json(id)).into_response())
}

/// `PUT /api/organizations/:organization_id`
#[tracing::instrument(skip(state, principal, body), fields(user_id = %principal.user_id))]
async fn update_organization(
    principal: Principal,
    State(state): State<AppState>,
    ApiPath(organization_id): ApiPath<Uuid>,
    body: Result<ApiJson<UpdateOrganizationCommand>, AppError>,
) -> Result<Response, AppError> {
    principal.require_admin()?;
    let ApiJson(mut command) = body?;
    command.organization_id = organization_id;

    super::commands::update::handle(state.organizations.as_ref(), &principal, command).await?;

    Ok(StatusCode::OK.into_response())
}

/// `DELETE /api/organizations/:organization_id`
#[tracing::instrument(skip(state, principal), fields(user_id = %principal.user_id))]
async fn deregister_organization(
    principal: Principal,
    State(state): State<AppState>,
    ApiPath(organization_id): ApiPath<Uuid>,
) -> Result<Response, AppError> {
    let command = DeregisterOrganizationCommand { organization_id };

    super::commands::deregister::handle(state.organizations.as_ref(), &principal, command).await?;

    Ok(StatusCode::OK.into_response())
}

/// `POST /api/organizations/:organization_id` - no request body
#[tracing::instrument(skip(state, principal), fields(user_id = %principal.user_id))]
async fn reregister_organization(
    principal: Principal,
    State(state): State<AppState>,
    ApiPath(organization_id): ApiPath<Uuid>,
) -> Result<Response, AppError> {
    let command = ReregisterOrganizationCommand { organization_id };

    super::commands::reregister::handle(state.organizations.as_ref(), &principal, command).await?;

    Ok(StatusCode::OK.into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

#[tracing::instrument(skip(state, principal), fields(user_id = %principal.user_id))]
async fn list_organizations(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let organizations =
        super::queries::list::handle(state.organizations_read.as_ref(), &principal).await?;

    Ok((StatusCode::OK, Json(organizations)).into_response())
}

#[tracing::instrument(skip(state, principal), fields(user_id = %principal.user_id))]
async fn get_organization(
    principal: Principal,
    State(state): State<AppState>,
    ApiPath(organization_id): ApiPath<Uuid>,
) -> Result<Response, AppError> {
    let query = GetOrganizationQuery { organization_id };

    let organization =
        super::queries::get::handle(state.organizations_read.as_ref(), &principal, query).await?;

    Ok((StatusCode::OK, Json(organization)).into_response())
}
