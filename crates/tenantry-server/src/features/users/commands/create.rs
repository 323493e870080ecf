//! Create user command
//!
//! Adds a user to an organization. Administrators only; email, password and
//! display name must all be present.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthorizationError, Principal};
use crate::features::shared::validation::{require_non_blank, RequiredFieldError};
use crate::models::NewUser;
use crate::services::{ServiceError, UsersService};

/// Command to create a user inside an organization
///
/// `organization_id` comes from the request path.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserCommand {
    #[serde(skip)]
    pub organization_id: Uuid,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl std::fmt::Debug for CreateUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserCommand")
            .field("organization_id", &self.organization_id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error(transparent)]
    Validation(#[from] RequiredFieldError),
    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl CreateUserCommand {
    pub fn validate(&self) -> Result<(), CreateUserError> {
        require_non_blank(&self.email, "email")?;
        require_non_blank(&self.password, "password")?;
        require_non_blank(&self.display_name, "displayName")?;
        Ok(())
    }
}

/// Handles the create user command
///
/// Non-administrators are refused before the body is looked at, including
/// for their own organization.
#[tracing::instrument(
    skip(service, command),
    fields(admin_id = %principal.user_id, organization_id = %command.organization_id)
)]
pub async fn handle(
    service: &dyn UsersService,
    principal: &Principal,
    command: CreateUserCommand,
) -> Result<Uuid, CreateUserError> {
    principal.require_admin()?;
    command.validate()?;

    let CreateUserCommand {
        organization_id,
        email,
        password,
        display_name,
    } = command;

    let id = service
        .create_user(
            principal.user_id,
            organization_id,
            NewUser {
                email,
                display_name,
                raw_password: password,
            },
        )
        .await?;

    tracing::info!(user_id = %id, "User created");
    Ok(id)
}
