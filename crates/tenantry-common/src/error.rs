//! Error types shared across Tenantry crates

use thiserror::Error;

/// Result type alias for shared Tenantry operations
pub type Result<T> = std::result::Result<T, TenantryError>;

/// Errors raised by shared utilities
#[derive(Error, Debug)]
pub enum TenantryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid {setting} value '{value}'")]
    InvalidSetting { setting: &'static str, value: String },
}

impl TenantryError {
    /// Shorthand for an unparseable setting value
    pub fn invalid_setting(setting: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting,
            value: value.into(),
        }
    }
}
