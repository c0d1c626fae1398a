//! Common error types for services

use thiserror::Error;

/// Commerce error types
#[derive(Debug, Error)]
pub enum CommerceError {
    /// Category string did not match any known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Configuration rejected during validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
