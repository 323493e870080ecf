pub mod get;
pub mod list;

pub use get::{GetOrganizationError, GetOrganizationQuery};
pub use list::ListOrganizationsError;
