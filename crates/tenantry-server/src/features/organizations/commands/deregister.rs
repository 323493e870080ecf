//! Deregister organization command
//!
//! Marks an organization as deregistered. The record is kept and can be
//! restored with the reregister command.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthorizationError, Principal};
use crate::services::{OrganizationsService, ServiceError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeregisterOrganizationCommand {
    pub organization_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum DeregisterOrganizationError {
    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[tracing::instrument(skip(service), fields(admin_id = %principal.user_id))]
pub async fn handle(
    service: &dyn OrganizationsService,
    principal: &Principal,
    command: DeregisterOrganizationCommand,
) -> Result<(), DeregisterOrganizationError> {
    principal.require_admin()?;

    service
        .deregister_organization(principal.user_id, command.organization_id)
        .await?;

    tracing::info!(organization_id = %command.organization_id, "Organization deregistered");
    Ok(())
}
