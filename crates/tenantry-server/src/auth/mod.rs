//! Request principal and role checks
//!
//! The authenticating gateway in front of the server forwards the caller's
//! identity as headers:
//!
//! - `x-user-id` - the acting user's id
//! - `x-organization-id` - the organization the user belongs to
//! - `x-user-roles` - comma separated roles, e.g. `ADMIN` or `ROLE_ORG_USER`
//!
//! Handlers take a [`Principal`] argument; a request without a usable
//! identity is rejected with 401 before the handler body runs.

use axum::{extract::FromRequestParts, http::request::Parts, http::HeaderMap};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const ORGANIZATION_ID_HEADER: &str = "x-organization-id";
pub const ROLES_HEADER: &str = "x-user-roles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    OrgUser,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::OrgUser => "ORG_USER",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match name {
            "ADMIN" => Ok(Role::Admin),
            "ORG_USER" => Ok(Role::OrgUser),
            _ => Err(format!("Unknown role '{}'", s.trim())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing or malformed identity headers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing {0} header")]
    MissingHeader(&'static str),

    #[error("Header {0} is not a valid identifier")]
    InvalidHeader(&'static str),
}

/// The principal is known but not allowed to perform the action
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("Administrator role required")]
    AdminRequired,

    #[error("Access to organization '{0}' is not allowed")]
    NotMember(Uuid),
}

/// The authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn new(user_id: Uuid, organization_id: Uuid, roles: Vec<Role>) -> Self {
        Self {
            user_id,
            organization_id,
            roles,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn belongs_to(&self, organization_id: Uuid) -> bool {
        self.organization_id == organization_id
    }

    pub fn require_admin(&self) -> Result<(), AuthorizationError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AuthorizationError::AdminRequired)
        }
    }

    /// Admins pass for any organization, everyone else only for their own.
    pub fn require_admin_or_member(&self, organization_id: Uuid) -> Result<(), AuthorizationError> {
        if self.is_admin() || self.belongs_to(organization_id) {
            Ok(())
        } else {
            Err(AuthorizationError::NotMember(organization_id))
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthError> {
        let user_id = uuid_header(headers, USER_ID_HEADER)?;
        let organization_id = uuid_header(headers, ORGANIZATION_ID_HEADER)?;

        let roles = headers
            .get(ROLES_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(parse_roles)
            .unwrap_or_default();

        Ok(Self::new(user_id, organization_id, roles))
    }
}

fn uuid_header(headers: &HeaderMap, name: &'static str) -> Result<Uuid, AuthError> {
    let value = headers
        .get(name)
        .ok_or(AuthError::MissingHeader(name))?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader(name))?;

    Uuid::parse_str(value.trim()).map_err(|_| AuthError::InvalidHeader(name))
}

fn parse_roles(raw: &str) -> Vec<Role> {
    let mut roles = Vec::new();
    for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
        match part.parse::<Role>() {
            Ok(role) if !roles.contains(&role) => roles.push(role),
            Ok(_) => {},
            Err(e) => tracing::debug!("Ignoring role: {}", e),
        }
    }
    roles
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Principal::from_headers(&parts.headers).map_err(|e| {
            tracing::debug!(error = %e, "Rejecting request without identity");
            AppError::from(e)
        })
    }
}
