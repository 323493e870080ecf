//! Create organization command
//!
//! Registers a new organization. Only administrators may create
//! organizations, and the name must not be blank.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthorizationError, Principal};
use crate::features::organizations::types::OrganizationRequest;
use crate::features::shared::validation::RequiredFieldError;
use crate::services::{OrganizationsService, ServiceError};

/// Command to create a new organization
///
/// # Examples
///
/// ```rust,ignore
/// let command = CreateOrganizationCommand {
///     organization: OrganizationRequest {
///         name: "Umbrella".to_string(),
///         city: "Raccoon City".to_string(),
///         ..Default::default()
///     },
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateOrganizationCommand {
    pub organization: OrganizationRequest,
}

/// Errors that can occur when creating an organization
#[derive(Debug, thiserror::Error)]
pub enum CreateOrganizationError {
    #[error(transparent)]
    Validation(#[from] RequiredFieldError),
    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl CreateOrganizationCommand {
    pub fn validate(&self) -> Result<(), CreateOrganizationError> {
        Ok(self.organization.validate()?)
    }
}

/// Handles the create organization command
///
/// Returns the id assigned by the service.
///
/// # Errors
///
/// - `Forbidden` - The principal is not an administrator
/// - `Validation` - The name is blank; nothing is sent to the service
/// - `Service` - The service rejected the request
#[tracing::instrument(skip(service, command), fields(admin_id = %principal.user_id))]
pub async fn handle(
    service: &dyn OrganizationsService,
    principal: &Principal,
    command: CreateOrganizationCommand,
) -> Result<Uuid, CreateOrganizationError> {
    principal.require_admin()?;
    command.validate()?;

    let id = service
        .create_organization(principal.user_id, command.organization.into_details())
        .await?;

    tracing::info!(organization_id = %id, "Organization created");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::*;
    use crate::models::OrganizationAddress;

    fn command(name: &str) -> CreateOrganizationCommand {
        CreateOrganizationCommand {
            organization: OrganizationRequest {
                name: name.to_string(),
                street: "street-1".to_string(),
                city: "city-1".to_string(),
                state: "state-1".to_string(),
                country: "country-1".to_string(),
                postal_code: "12345".to_string(),
                website_url: "https://umbrella.com".to_string(),
                contact_name: "contact-1".to_string(),
                phone_number: "555-0100".to_string(),
                email_address: "admin@umbrella.com".to_string(),
            },
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(command("Umbrella").validate().is_ok());
    }

    #[test]
    fn test_validation_blank_name() {
        for name in ["", " ", "\t"] {
            assert!(matches!(
                command(name).validate(),
                Err(CreateOrganizationError::Validation(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_handle_delegates_every_field() {
        let directory = RecordingDirectory::new();
        let admin = admin();

        let id = handle(&directory, &admin, command("Umbrella"))
            .await
            .unwrap();
        assert_eq!(id, directory.created_id);

        assert_eq!(
            directory.calls(),
            vec![Call::CreateOrganization {
                requested_by: admin.user_id,
                details: crate::models::OrganizationDetails {
                    name: "Umbrella".to_string(),
                    address: OrganizationAddress {
                        street: "street-1".to_string(),
                        city: "city-1".to_string(),
                        state: "state-1".to_string(),
                        country: "country-1".to_string(),
                        postal_code: "12345".to_string(),
                    },
                    website_url: "https://umbrella.com".to_string(),
                    contact_name: "contact-1".to_string(),
                    phone_number: "555-0100".to_string(),
                    email_address: "admin@umbrella.com".to_string(),
                },
            }]
        );
    }

    #[tokio::test]
    async fn test_handle_blank_name_never_reaches_service() {
        let directory = RecordingDirectory::new();

        let result = handle(&directory, &admin(), command(" ")).await;
        assert!(matches!(result, Err(CreateOrganizationError::Validation(_))));
        assert!(directory.calls().is_empty());
    }

    #[tokio::test]
    async fn test_handle_requires_admin() {
        let directory = RecordingDirectory::new();
        let member = member_of(uuid::Uuid::new_v4());

        let result = handle(&directory, &member, command("Umbrella")).await;
        assert!(matches!(
            result,
            Err(CreateOrganizationError::Forbidden(AuthorizationError::AdminRequired))
        ));
        assert!(directory.calls().is_empty());
    }
}
