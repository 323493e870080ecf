//! Domain value types shared by the HTTP layer and the services behind it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Postal address of an organization. Every part may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// The mutable field set of an organization, as submitted on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDetails {
    pub name: String,
    pub address: OrganizationAddress,
    pub website_url: String,
    pub contact_name: String,
    pub phone_number: String,
    pub email_address: String,
}

/// A tenant.
///
/// Organizations are never removed; deregistration flips `deregistered` and
/// reregistration flips it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub details: OrganizationDetails,
    pub deregistered: bool,
}

impl Organization {
    pub fn new(id: Uuid, details: OrganizationDetails) -> Self {
        Self {
            id,
            details,
            deregistered: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn is_active(&self) -> bool {
        !self.deregistered
    }
}

/// A member of an organization. The username is the user's email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub username: String,
    pub display_name: String,
    pub disabled: bool,
}

/// Input for creating a user inside an organization.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    pub raw_password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("raw_password", &"<redacted>")
            .finish()
    }
}
