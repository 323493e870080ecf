//! Request and response bodies shared by organization commands and queries

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::shared::validation::{require_non_blank, RequiredFieldError};
use crate::models::{Organization, OrganizationAddress, OrganizationDetails};

/// Organization fields accepted on create and update.
///
/// Missing fields read as empty strings. `organizationName` is accepted in
/// place of `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationRequest {
    #[serde(alias = "organizationName")]
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub website_url: String,
    pub contact_name: String,
    pub phone_number: String,
    pub email_address: String,
}

impl OrganizationRequest {
    pub fn validate(&self) -> Result<(), RequiredFieldError> {
        require_non_blank(&self.name, "name")
    }

    /// Field values pass through as submitted, untrimmed.
    pub fn into_details(self) -> OrganizationDetails {
        OrganizationDetails {
            name: self.name,
            address: OrganizationAddress {
                street: self.street,
                city: self.city,
                state: self.state,
                country: self.country,
                postal_code: self.postal_code,
            },
            website_url: self.website_url,
            contact_name: self.contact_name,
            phone_number: self.phone_number,
            email_address: self.email_address,
        }
    }
}

/// Wire form of an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub id: Uuid,
    pub organization_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub website_url: String,
    pub contact_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub deregistered: bool,
}

impl From<Organization> for OrganizationResponse {
    fn from(org: Organization) -> Self {
        let OrganizationDetails {
            name,
            address,
            website_url,
            contact_name,
            phone_number,
            email_address,
        } = org.details;

        Self {
            id: org.id,
            organization_name: name,
            street: address.street,
            city: address.city,
            state: address.state,
            country: address.country,
            postal_code: address.postal_code,
            website_url,
            contact_name,
            phone_number,
            email_address,
            deregistered: org.deregistered,
        }
    }
}
