//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// One or more recipient fragments failed the address check.
    /// Carries every offending fragment so a caller can surface all of
    /// them at once rather than the first failure only.
    #[error("Invalid email addresses: {}", .0.join(", "))]
    InvalidRecipients(Vec<String>),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Required content was empty
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}
