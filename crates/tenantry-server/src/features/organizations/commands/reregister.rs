//! Reregister organization command

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthorizationError, Principal};
use crate::services::{OrganizationsService, ServiceError};

/// Returns a deregistered organization to the active state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReregisterOrganizationCommand {
    pub organization_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum ReregisterOrganizationError {
    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[tracing::instrument(skip(service), fields(admin_id = %principal.user_id))]
pub async fn handle(
    service: &dyn OrganizationsService,
    principal: &Principal,
    command: ReregisterOrganizationCommand,
) -> Result<(), ReregisterOrganizationError> {
    principal.require_admin()?;

    service
        .reregister_organization(principal.user_id, command.organization_id)
        .await?;

    tracing::info!(organization_id = %command.organization_id, "Organization reregistered");
    Ok(())
}
