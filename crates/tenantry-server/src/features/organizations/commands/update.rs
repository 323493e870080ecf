//! Update organization command
//!
//! Replaces the full field set of an existing organization. Fields left out
//! of the request body are sent to the service as empty strings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthorizationError, Principal};
use crate::features::organizations::types::OrganizationRequest;
use crate::features::shared::validation::RequiredFieldError;
use crate::services::{OrganizationsService, ServiceError};

/// Command to update an existing organization
///
/// `organization_id` comes from the request path, never from the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateOrganizationCommand {
    #[serde(skip)]
    pub organization_id: Uuid,
    pub organization: OrganizationRequest,
}

/// Errors that can occur when updating an organization
#[derive(Debug, thiserror::Error)]
pub enum UpdateOrganizationError {
    #[error(transparent)]
    Validation(#[from] RequiredFieldError),
    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl UpdateOrganizationCommand {
    pub fn validate(&self) -> Result<(), UpdateOrganizationError> {
        Ok(self.organization.validate()?)
    }
}

/// Handles the update organization command
///
/// # Errors
///
/// - `Forbidden` - The principal is not an administrator
/// - `Validation` - The name is blank; nothing is sent to the service
/// - `Service` - Unknown organization, or the organization is deregistered
#[tracing::instrument(
    skip(service, command),
    fields(admin_id = %principal.user_id, organization_id = %command.organization_id)
)]
pub async fn handle(
    service: &dyn OrganizationsService,
    principal: &Principal,
    command: UpdateOrganizationCommand,
) -> Result<(), UpdateOrganizationError> {
    principal.require_admin()?;
    command.validate()?;

    service
        .update_organization(
            principal.user_id,
            command.organization_id,
            command.organization.into_details(),
        )
        .await?;

    tracing::info!("Organization updated");
    Ok(())
}
