//! Shared setup for API integration tests
//!
//! Routes are driven with `tower::ServiceExt::oneshot` against a
//! [`FakeDirectory`], which serves canned data and records every service call.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use tenantry_server::{
    api::{create_router, AppState},
    config::Config,
    models::{NewUser, Organization, OrganizationAddress, OrganizationDetails, User},
    services::{
        OrganizationsReadService, OrganizationsService, ServiceError, ServiceResult,
        UsersReadService, UsersService,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateOrganization(Uuid, OrganizationDetails),
    UpdateOrganization(Uuid, Uuid, OrganizationDetails),
    DeregisterOrganization(Uuid, Uuid),
    ReregisterOrganization(Uuid, Uuid),
    GetOrganizations,
    GetById(Uuid),
    CreateUser(Uuid, Uuid, NewUser),
    GetUsersForOrganization(Uuid),
}

pub struct FakeDirectory {
    pub created_id: Uuid,
    pub organizations: Vec<Organization>,
    pub users: Vec<User>,
    pub fail_with_conflict: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self {
            created_id: Uuid::new_v4(),
            organizations: Vec::new(),
            users: Vec::new(),
            fail_with_conflict: false,
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

    pub fn conflicting(mut self) -> Self {
        self.fail_with_conflict = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ServiceResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_with_conflict {
            return Err(ServiceError::Conflict("Organization is deregistered".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OrganizationsService for FakeDirectory {
    async fn create_organization(
        &self,
        requested_by: Uuid,
        details: OrganizationDetails,
    ) -> ServiceResult<Uuid> {
        self.record(Call::CreateOrganization(requested_by, details))?;
        Ok(self.created_id)
    }

    async fn update_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
        details: OrganizationDetails,
    ) -> ServiceResult<()> {
        self.record(Call::UpdateOrganization(requested_by, organization_id, details))
    }

    async fn deregister_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
    ) -> ServiceResult<()> {
        self.record(Call::DeregisterOrganization(requested_by, organization_id))
    }

    async fn reregister_organization(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
    ) -> ServiceResult<()> {
        self.record(Call::ReregisterOrganization(requested_by, organization_id))
    }
}

#[async_trait]
impl OrganizationsReadService for FakeDirectory {
    async fn get_organizations(&self) -> ServiceResult<Vec<Organization>> {
        self.calls.lock().unwrap().push(Call::GetOrganizations);
        Ok(self.organizations.clone())
    }

    async fn get_by_id(&self, organization_id: Uuid) -> ServiceResult<Organization> {
        self.calls.lock().unwrap().push(Call::GetById(organization_id));
        self.organizations
            .iter()
            .find(|o| o.id == organization_id)
            .cloned()
            .ok_or_else(|| ServiceError::organization_not_found(organization_id))
    }
}

#[async_trait]
impl UsersService for FakeDirectory {
    async fn create_user(
        &self,
        requested_by: Uuid,
        organization_id: Uuid,
        new_user: NewUser,
    ) -> ServiceResult<Uuid> {
        self.record(Call::CreateUser(requested_by, organization_id, new_user))?;
        Ok(self.created_id)
    }
}

#[async_trait]
impl UsersReadService for FakeDirectory {
    async fn get_users_for_organization(&self, organization_id: Uuid) -> ServiceResult<Vec<User>> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::GetUsersForOrganization(organization_id));
        Ok(self
            .users
            .iter()
            .filter(|u| u.organization_id == organization_id)
            .cloned()
            .collect())
    }
}

pub fn setup_test_app(directory: Arc<FakeDirectory>) -> Router {
    let state = AppState::new(
        directory.clone(),
        directory.clone(),
        directory.clone(),
        directory,
    );
    create_router(state, &Config::default())
}

pub fn organization(name: &str) -> Organization {
    Organization::new(
        Uuid::new_v4(),
        OrganizationDetails {
            name: name.to_string(),
            address: OrganizationAddress {
                street: format!("{} street", name),
                city: "Raccoon City".to_string(),
                state: "state-1".to_string(),
                country: "country-1".to_string(),
                postal_code: "12345".to_string(),
            },
            website_url: format!("https://{}.com", name),
            contact_name: "contact-1".to_string(),
            phone_number: "555-0100".to_string(),
            email_address: format!("admin@{}.com", name),
        },
    )
}

pub fn user(organization_id: Uuid, email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        organization_id,
        username: email.to_string(),
        display_name: "display name".to_string(),
        disabled: false,
    }
}

/// Identity forwarded by the gateway
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub roles: &'static str,
}

impl Caller {
    pub fn admin() -> Self {
        Self {
            user_id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            roles: "ROLE_ADMIN",
        }
    }

    pub fn member_of(organization_id: Uuid) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            organization_id,
            roles: "ORG_USER",
        }
    }
}

pub fn request(method: Method, uri: &str, caller: Option<&Caller>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(caller) = caller {
        builder = builder
            .header("x-user-id", caller.user_id.to_string())
            .header("x-organization-id", caller.organization_id.to_string())
            .header("x-user-roles", caller.roles);
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
