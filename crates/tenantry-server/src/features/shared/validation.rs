//! Shared validation utilities
//!
//! Request fields that must carry a value are checked with
//! [`require_non_blank`]. Blank means empty or whitespace only.

use thiserror::Error;

/// A required field was empty or whitespace only
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field} is required and cannot be blank")]
pub struct RequiredFieldError {
    pub field: &'static str,
}

impl RequiredFieldError {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fails with [`RequiredFieldError`] naming `field` when `value` is blank
pub fn require_non_blank(value: &str, field: &'static str) -> Result<(), RequiredFieldError> {
    if is_blank(value) {
        Err(RequiredFieldError::new(field))
    } else {
        Ok(())
    }
}
