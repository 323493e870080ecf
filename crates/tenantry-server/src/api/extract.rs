//! Request extractors whose rejections render as [`AppError`]
//!
//! axum's own `Json` and `Path` answer malformed input with plain-text
//! bodies. These wrappers route the same failures through the JSON error
//! envelope as `VALIDATION_ERROR`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Typed path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
