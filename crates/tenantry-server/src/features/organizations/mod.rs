pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use commands::{
    CreateOrganizationCommand, CreateOrganizationError, DeregisterOrganizationCommand,
    DeregisterOrganizationError, ReregisterOrganizationCommand, ReregisterOrganizationError,
    UpdateOrganizationCommand, UpdateOrganizationError,
};

pub use queries::{GetOrganizationError, GetOrganizationQuery, ListOrganizationsError};

pub use routes::organizations_routes;
pub use types::{OrganizationRequest, OrganizationResponse};
