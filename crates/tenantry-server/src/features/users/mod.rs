pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{CreateUserCommand, CreateUserError};
pub use queries::{ListUsersError, ListUsersQuery, UserResponse};
pub use routes::users_routes;
