//! Collaborators behind the HTTP layer
//!
//! Writes and reads are split: `OrganizationsService` and `UsersService`
//! accept changes, `OrganizationsReadService` and `UsersReadService` answer
//! queries. Handlers only ever see these traits, so the backing store can be
//! swapped without touching routing, validation or authorization.
//!
//! [`memory::InMemoryDirectory`] implements all four against process memory.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewUser, Organization, OrganizationDetails, User};

pub use memory::InMemoryDirectory;

/// Errors reported by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{0}")]
    Conflict(String),

    #[error("Internal service error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn organization_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity: "Organization",
            id,
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Write side for organizations. `requested_by` is the acting user.
#[async_trait]
pub trait OrganizationsService: Send + Sync {
    async fn create_organization(
        &self,
        requested_by: Uuid,
        details: OrganizationDetails,
    ) -> ServiceResult<Uuid>;

    async fn update_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
        details: OrganizationDetails,
    ) -> ServiceResult<()>;

    async fn deregister_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
    ) -> ServiceResult<()>;

    async fn reregister_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
    ) -> ServiceResult<()>;
}

/// Read side for organizations
#[async_trait]
pub trait OrganizationsReadService: Send + Sync {
    async fn get_organizations(&self) -> ServiceResult<Vec<Organization>>;

    async fn get_by_id(&self, organization_id: Uuid) -> ServiceResult<Organization>;
}

/// Write side for users
#[async_trait]
pub trait UsersService: Send + Sync {
    async fn create_user(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
        new_user: NewUser,
    ) -> ServiceResult<Uuid>;
}

/// Read side for users
#[async_trait]
pub trait UsersReadService: Send + Sync {
    async fn get_users_for_organization(&self, organization_id: Uuid) -> ServiceResult<Vec<User>>;
}
