//! SendGrid client errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the SendGrid mail-send client
#[derive(Debug, Error)]
pub enum SendGridError {
    /// The client was constructed with unusable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connection to the provider failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed in transit
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider answered with a non-accepted status
    #[error("Email sending failed with status code {status}")]
    Rejected { status: u16 },

    /// A required message field was empty
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// The attachment path does not exist on disk
    #[error("File not found: {}", .0.display())]
    AttachmentNotFound(PathBuf),

    /// The attachment could not be read
    #[error("Failed to add attachment: {0}")]
    Attachment(String),
}
