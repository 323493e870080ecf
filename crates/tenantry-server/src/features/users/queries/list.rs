//! List users of an organization
//!
//! Open to administrators and to members of the organization itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthorizationError, Principal};
use crate::models::User;
use crate::services::{ServiceError, UsersReadService};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersQuery {
    pub organization_id: Uuid,
}

/// Wire form of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub disabled: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            organization_id: user.organization_id,
            email: user.username,
            display_name: user.display_name,
            disabled: user.disabled,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListUsersError {
    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[tracing::instrument(skip(service), fields(user_id = %principal.user_id))]
pub async fn handle(
    service: &dyn UsersReadService,
    principal: &Principal,
    query: ListUsersQuery,
) -> Result<Vec<UserResponse>, ListUsersError> {
    principal.require_admin_or_member(query.organization_id)?;

    let users = service
        .get_users_for_organization(query.organization_id)
        .await?;
    tracing::debug!(count = users.len(), "Users listed");

    Ok(users.into_iter().map(UserResponse::from).collect())
}
