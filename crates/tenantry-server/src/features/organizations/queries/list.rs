//! List organizations query

use crate::auth::{AuthorizationError, Principal};
use crate::features::organizations::types::OrganizationResponse;
use crate::services::{OrganizationsReadService, ServiceError};

#[derive(Debug, thiserror::Error)]
pub enum ListOrganizationsError {
    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Returns every organization, in the order the read service yields them.
/// Administrators only.
#[tracing::instrument(skip(service), fields(user_id = %principal.user_id))]
pub async fn handle(
    service: &dyn OrganizationsReadService,
    principal: &Principal,
) -> Result<Vec<OrganizationResponse>, ListOrganizationsError> {
    principal.require_admin()?;

    let organizations = service.get_organizations().await?;
    tracing::debug!(count = organizations.len(), "Organizations listed");

    Ok(organizations
        .into_iter()
        .map(OrganizationResponse::from)
        .collect())
}
