pub mod create;
pub mod deregister;
pub mod reregister;
pub mod update;

pub use create::{CreateOrganizationCommand, CreateOrganizationError};
pub use deregister::{DeregisterOrganizationCommand, DeregisterOrganizationError};
pub use reregister::{ReregisterOrganizationCommand, ReregisterOrganizationError};
pub use update::{UpdateOrganizationCommand, UpdateOrganizationError};
