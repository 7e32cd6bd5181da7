//! Email port for the application layer
//!
//! Interface to the transactional email provider. Implemented by an
//! adapter in the infrastructure layer.

use std::path::PathBuf;

use async_trait::async_trait;
use domain::RecipientList;
use thiserror::Error;

/// Email port errors
#[derive(Debug, Error)]
pub enum EmailError {
    /// Provider answered with a non-accepted status
    #[error("Email sending failed with status code {status}")]
    Rejected { status: u16 },

    /// Provider unreachable or the request failed in transit
    #[error("Failed to send email: {0}")]
    Transport(String),

    /// A required message field was empty
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// Attachment path does not exist on disk
    #[error("File not found: {0}")]
    AttachmentNotFound(String),

    /// Attachment could not be read or encoded
    #[error("Failed to add attachment: {0}")]
    Attachment(String),

    /// Email capability misconfigured (missing key or from-address)
    #[error("Email configuration error: {0}")]
    Configuration(String),
}

/// An outbound email composed by the application
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    /// Validated recipients, in the order given
    pub to: RecipientList,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
    /// Optional attachment path (whole file, in memory)
    pub attachment: Option<PathBuf>,
}

/// Email port trait
///
/// A single provider call per send; no retry, no queuing. Success means the
/// provider ACCEPTED the message, not that it was delivered.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailPort: Send + Sync {
    /// Send one email, returning the provider's accepted status code
    async fn send(&self, email: &OutboundEmail) -> Result<u16, EmailError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_embeds_status() {
        let err = EmailError::Rejected { status: 500 };
        assert_eq!(err.to_string(), "Email sending failed with status code 500");
    }

    #[test]
    fn transport_message_embeds_cause() {
        let err = EmailError::Transport("dns failure".to_string());
        assert_eq!(err.to_string(), "Failed to send email: dns failure");
    }

    #[test]
    fn outbound_email_construction() {
        let email = OutboundEmail {
            to: RecipientList::parse("a@b.com").unwrap(),
            subject: "Subject".to_string(),
            body: "Body".to_string(),
            attachment: None,
        };
        assert_eq!(email.to.len(), 1);
        assert!(email.attachment.is_none());
    }
}
