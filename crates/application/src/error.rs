//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (validation, malformed input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Planning backend answered with a non-200 status
    #[error("Planning backend returned status {status}")]
    BackendStatus { status: u16 },

    /// Email provider answered with a non-accepted status
    #[error("Email sending failed with status code {status}")]
    ProviderStatus { status: u16 },

    /// External service unreachable or failed in transit
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
