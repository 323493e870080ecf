//! Shared utilities for feature modules
//!
//! - **validation**: blank-field checks used by commands
//! - **test_helpers**: fixtures and recording services (test-only)

pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::{require_non_blank, RequiredFieldError};
