//! Process-memory implementation of every service trait
//!
//! Backs the server binary and the handler tests. Nothing survives a restart,
//! and raw passwords are not retained.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    OrganizationsReadService, OrganizationsService, ServiceError, ServiceResult,
    UsersReadService, UsersService,
};
use crate::models::{NewUser, Organization, OrganizationDetails, User};

#[derive(Debug, Default)]
struct Directory {
    // Registration order is the listing order.
    organizations: Vec<Organization>,
    users: Vec<User>,
}

impl Directory {
    fn organization_mut(&mut self, id: Uuid) -> ServiceResult<&mut Organization> {
        self.organizations
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ServiceError::organization_not_found(id))
    }

    fn active_organization_mut(&mut self, id: Uuid) -> ServiceResult<&mut Organization> {
        let organization = self.organization_mut(id)?;
        if organization.deregistered {
            return Err(ServiceError::Conflict(format!(
                "Organization '{}' is deregistered",
                id
            )));
        }
        Ok(organization)
    }
}

/// Organizations and users held in a single lock.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    directory: RwLock<Directory>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrganizationsService for InMemoryDirectory {
    #[tracing::instrument(skip(self, details), fields(name = %details.name))]
    async fn create_organization(
        &self,
        requested_by: Uuid,
        details: OrganizationDetails,
    ) -> ServiceResult<Uuid> {
        let id = Uuid::new_v4();
        self.directory
            .write()
            .await
            .organizations
            .push(Organization::new(id, details));

        tracing::info!(
            organization_id = %id,
            requested_by = %requested_by,
            "Organization registered"
        );
        Ok(id)
    }

    #[tracing::instrument(skip(self, details))]
    async fn update_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
        details: OrganizationDetails,
    ) -> ServiceResult<()> {
        let mut directory = self.directory.write().await;
        directory.active_organization_mut(organization_id)?.details = details;

        tracing::info!(requested_by = %requested_by, "Organization details updated");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn deregister_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
    ) -> ServiceResult<()> {
        let mut directory = self.directory.write().await;
        directory.active_organization_mut(organization_id)?.deregistered = true;

        tracing::info!(requested_by = %requested_by, "Organization deregistered");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn reregister_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
    ) -> ServiceResult<()> {
        let mut directory = self.directory.write().await;
        let organization = directory.organization_mut(organization_id)?;
        if organization.is_active() {
            return Err(ServiceError::Conflict(format!(
                "Organization '{}' is already registered",
                organization_id
            )));
        }
        organization.deregistered = false;

        tracing::info!(requested_by = %requested_by, "Organization reregistered");
        Ok(())
    }
}

#[async_trait]
impl OrganizationsReadService for InMemoryDirectory {
    async fn get_organizations(&self) -> ServiceResult<Vec<Organization>> {
        Ok(self.directory.read().await.organizations.clone())
    }

    async fn get_by_id(&self, organization_id: Uuid) -> ServiceResult<Organization> {
        self.directory
            .read()
            .await
            .organizations
            .iter()
            .find(|o| o.id == organization_id)
            .cloned()
            .ok_or_else(|| ServiceError::organization_not_found(organization_id))
    }
}

#[async_trait]
impl UsersService for InMemoryDirectory {
    #[tracing::instrument(skip(self, new_user), fields(email = %new_user.email))]
    async fn create_user(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
        new_user: NewUser,
    ) -> ServiceResult<Uuid> {
        let NewUser {
            email,
            display_name,
            ..
        } = new_user;

        let mut directory = self.directory.write().await;
        directory.active_organization_mut(organization_id)?;

        if directory
            .users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(&email))
        {
            return Err(ServiceError::Conflict(format!(
                "A user with email '{}' already exists",
                email
            )));
        }

        let id = Uuid::new_v4();
        directory.users.push(User {
            id,
            organization_id,
            username: email,
            display_name,
            disabled: false,
        });

        tracing::info!(user_id = %id, requested_by = %requested_by, "User created");
        Ok(id)
    }
}

#[async_trait]
impl UsersReadService for InMemoryDirectory {
    async fn get_users_for_organization(&self, organization_id: Uuid) -> ServiceResult<Vec<User>> {
        let directory = self.directory.read().await;
        if !directory.organizations.iter().any(|o| o.id == organization_id) {
            return Err(ServiceError::organization_not_found(organization_id));
        }

        Ok(directory
            .users
            .iter()
            .filter(|u| u.organization_id == organization_id)
            .cloned()
            .collect())
    }
}
