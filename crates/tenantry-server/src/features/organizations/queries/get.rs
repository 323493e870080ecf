//! Get organization query
//!
//! Administrators may read any organization. Other users may only read the
//! organization they belong to; asking for another one is refused before the
//! read service is consulted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthorizationError, Principal};
use crate::features::organizations::types::OrganizationResponse;
use crate::services::{OrganizationsReadService, ServiceError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrganizationQuery {
    pub organization_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum GetOrganizationError {
    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[tracing::instrument(skip(service), fields(user_id = %principal.user_id))]
pub async fn handle(
    service: &dyn OrganizationsReadService,
    principal: &Principal,
    query: GetOrganizationQuery,
) -> Result<OrganizationResponse, GetOrganizationError> {
    principal.require_admin_or_member(query.organization_id)?;

    let organization = service.get_by_id(query.organization_id).await?;
    Ok(organization.into())
}
