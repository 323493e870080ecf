//! Test fixtures for feature unit tests
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::features::shared::test_helpers::*;
//!
//! let org = TestOrganization::new("organization-1").with_city("city-1").build();
//! let directory = RecordingDirectory::new().with_organizations(vec![org.clone()]);
//!
//! // ... run a handler ...
//! assert!(directory.calls().is_empty());
//! ```

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::auth::{Principal, Role};
use crate::models::{NewUser, Organization, OrganizationAddress, OrganizationDetails, User};
use crate::services::{
    OrganizationsReadService, OrganizationsService, ServiceError, ServiceResult,
    UsersReadService, UsersService,
};

/// Builder for test organizations
#[derive(Debug, Clone)]
pub struct TestOrganization {
    pub id: Uuid,
    pub details: OrganizationDetails,
    pub deregistered: bool,
}

impl TestOrganization {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            details: OrganizationDetails {
                name: name.to_string(),
                address: OrganizationAddress {
                    street: "street-1".to_string(),
                    city: "city-1".to_string(),
                    state: "state-1".to_string(),
                    country: "country-1".to_string(),
                    postal_code: "12345".to_string(),
                },
                website_url: "https://example.com".to_string(),
                contact_name: "contact-1".to_string(),
                phone_number: "555-0100".to_string(),
                email_address: "contact@example.com".to_string(),
            },
            deregistered: false,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.details.address.city = city.to_string();
        self
    }

    pub fn deregistered(mut self) -> Self {
        self.deregistered = true;
        self
    }

    pub fn details(&self) -> OrganizationDetails {
        self.details.clone()
    }

    pub fn build(self) -> Organization {
        Organization {
            id: self.id,
            details: self.details,
            deregistered: self.deregistered,
        }
    }
}

pub fn test_user(organization_id: Uuid, email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        organization_id,
        username: email.to_string(),
        display_name: format!("{} display", email),
        disabled: false,
    }
}

pub fn admin() -> Principal {
    Principal::new(Uuid::new_v4(), Uuid::new_v4(), vec![Role::Admin])
}

pub fn member_of(organization_id: Uuid) -> Principal {
    Principal::new(Uuid::new_v4(), organization_id, vec![Role::OrgUser])
}

/// A service call as seen by [`RecordingDirectory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateOrganization {
        requested_by: Uuid,
        details: OrganizationDetails,
    },
    UpdateOrganization {
        requested_by: Uuid,
        organization_id: Uuid,
        details: OrganizationDetails,
    },
    DeregisterOrganization {
        requested_by: Uuid,
        organization_id: Uuid,
    },
    ReregisterOrganization {
        requested_by: Uuid,
        organization_id: Uuid,
    },
    GetOrganizations,
    GetById(Uuid),
    CreateUser {
        requested_by: Uuid,
        organization_id: Uuid,
        new_user: NewUser,
    },
    GetUsersForOrganization(Uuid),
}

/// Implements every service trait over canned data and records each call
pub struct RecordingDirectory {
    pub created_id: Uuid,
    organizations: Vec<Organization>,
    users: Vec<User>,
    calls: Mutex<Vec<Call>>,
}

impl Default for RecordingDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingDirectory {
    pub fn new() -> Self {
        Self {
            created_id: Uuid::new_v4(),
            organizations: Vec::new(),
            users: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_organizations(mut self, organizations: Vec<Organization>) -> Self {
        self.organizations = organizations;
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl OrganizationsService for RecordingDirectory {
    async fn create_organization(
        &self,
        requested_by: Uuid,
        details: OrganizationDetails,
    ) -> ServiceResult<Uuid> {
        self.record(Call::CreateOrganization {
            requested_by,
            details,
        });
        Ok(self.created_id)
    }

    async fn update_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
        details: OrganizationDetails,
    ) -> ServiceResult<()> {
        self.record(Call::UpdateOrganization {
            requested_by,
            organization_id,
            details,
        });
        Ok(())
    }

    async fn deregister_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
    ) -> ServiceResult<()> {
        self.record(Call::DeregisterOrganization {
            requested_by,
            organization_id,
        });
        Ok(())
    }

    async fn reregister_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
    ) -> ServiceResult<()> {
        self.record(Call::ReregisterOrganization {
            requested_by,
            organization_id,
        });
        Ok(())
    }
}

#[async_trait]
impl OrganizationsReadService for RecordingDirectory {
    async fn get_organizations(&self) -> ServiceResult<Vec<Organization>> {
        self.record(Call::GetOrganizations);
        Ok(self.organizations.clone())
    }

    async fn get_by_id(&self, organization_id: Uuid) -> ServiceResult<Organization> {
        self.record(Call::GetById(organization_id));
        self.organizations
            .iter()
            .find(|o| o.id == organization_id)
            .cloned()
            .ok_or_else(|| ServiceError::organization_not_found(organization_id))
    }
}

#[async_trait]
impl UsersService for RecordingDirectory {
    async fn create_user(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
        new_user: NewUser,
    ) -> ServiceResult<Uuid> {
        self.record(Call::CreateUser {
            requested_by,
            organization_id,
            new_user,
        });
        Ok(self.created_id)
    }
}

#[async_trait]
impl UsersReadService for RecordingDirectory {
    async fn get_users_for_organization(&self, organization_id: Uuid) -> ServiceResult<Vec<User>> {
        self.record(Call::GetUsersForOrganization(organization_id));
        Ok(self
            .users
            .iter()
            .filter(|u| u.organization_id == organization_id)
            .cloned()
            .collect())
    }
}
