//! Server error type and its HTTP rendering
//!
//! Every command and query error converts into [`AppError`], which maps onto a
//! status code and the [`ErrorResponse`] body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api::response::ErrorResponse;
use crate::auth::{AuthError, AuthorizationError};
use crate::features::organizations::commands::{
    CreateOrganizationError, DeregisterOrganizationError, ReregisterOrganizationError,
    UpdateOrganizationError,
};
use crate::features::organizations::queries::{GetOrganizationError, ListOrganizationsError};
use crate::features::users::commands::CreateUserError;
use crate::features::shared::validation::RequiredFieldError;
use crate::features::users::queries::ListUsersError;
use crate::services::ServiceError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    MissingField(#[from] RequiredFieldError),

    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::MissingField(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            },
            other => other.to_string(),
        };

        let body = match &self {
            AppError::MissingField(e) => {
                ErrorResponse::with_details(self.code(), message, json!({ "field": e.field }))
            },
            _ => ErrorResponse::new(self.code(), message),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", err.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(err: PathRejection) -> Self {
        AppError::Validation(format!("Invalid path: {}", err.body_text()))
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { entity, id } => {
                AppError::NotFound(format!("{} '{}' not found", entity, id))
            },
            ServiceError::Conflict(message) => AppError::Conflict(message),
            ServiceError::Internal(e) => AppError::Internal(e),
        }
    }
}

impl From<CreateOrganizationError> for AppError {
    fn from(err: CreateOrganizationError) -> Self {
        match err {
            CreateOrganizationError::Validation(e) => e.into(),
            CreateOrganizationError::Forbidden(e) => e.into(),
            CreateOrganizationError::Service(e) => e.into(),
        }
    }
}

impl From<UpdateOrganizationError> for AppError {
    fn from(err: UpdateOrganizationError) -> Self {
        match err {
            UpdateOrganizationError::Validation(e) => e.into(),
            UpdateOrganizationError::Forbidden(e) => e.into(),
            UpdateOrganizationError::Service(e) => e.into(),
        }
    }
}

impl From<DeregisterOrganizationError> for AppError {
    fn from(err: DeregisterOrganizationError) -> Self {
        match err {
            DeregisterOrganizationError::Forbidden(e) => e.into(),
            DeregisterOrganizationError::Service(e) => e.into(),
        }
    }
}

impl From<ReregisterOrganizationError> for AppError {
    fn from(err: ReregisterOrganizationError) -> Self {
        match err {
            ReregisterOrganizationError::Forbidden(e) => e.into(),
            ReregisterOrganizationError::Service(e) => e.into(),
        }
    }
}

impl From<ListOrganizationsError> for AppError {
    fn from(err: ListOrganizationsError) -> Self {
        match err {
            ListOrganizationsError::Forbidden(e) => e.into(),
            ListOrganizationsError::Service(e) => e.into(),
        }
    }
}

impl From<GetOrganizationError> for AppError {
    fn from(err: GetOrganizationError) -> Self {
        match err {
            GetOrganizationError::Forbidden(e) => e.into(),
            GetOrganizationError::Service(e) => e.into(),
        }
    }
}

impl From<CreateUserError> for AppError {
    fn from(err: CreateUserError) -> Self {
        match err {
            CreateUserError::Validation(e) => e.into(),
            CreateUserError::Forbidden(e) => e.into(),
            CreateUserError::Service(e) => e.into(),
        }
    }
}

impl From<ListUsersError> for AppError {
    fn from(err: ListUsersError) -> Self {
        match err {
            ListUsersError::Forbidden(e) => e.into(),
            ListUsersError::Service(e) => e.into(),
        }
    }
}
