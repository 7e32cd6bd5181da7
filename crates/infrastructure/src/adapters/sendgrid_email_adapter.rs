//! SendGrid adapter - implements EmailPort using integration_sendgrid

use application::error::ApplicationError;
use application::ports::{EmailError, EmailPort, OutboundEmail};
use async_trait::async_trait;
use integration_sendgrid::{MailSender, OutboundMessage, SendGridClient, SendGridConfig, SendGridError};

/// Adapter for the SendGrid mail-send API
#[derive(Debug)]
pub struct SendGridEmailAdapter {
    client: SendGridClient,
}

impl SendGridEmailAdapter {
    /// Create a new adapter, validating the SendGrid configuration
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] when the API key or
    /// from-address is missing or malformed.
    pub fn new(config: SendGridConfig) -> Result<Self, ApplicationError> {
        let client = SendGridClient::new(config).map_err(|e| match e {
            SendGridError::Configuration(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Internal(other.to_string()),
        })?;
        Ok(Self { client })
    }

    /// Map an integration client error to a port error
    fn map_error(err: SendGridError) -> EmailError {
        match err {
            SendGridError::Rejected { status } => EmailError::Rejected { status },
            SendGridError::ConnectionFailed(e) | SendGridError::RequestFailed(e) => {
                EmailError::Transport(e)
            },
            SendGridError::EmptyField(field) => EmailError::EmptyField(field),
            SendGridError::AttachmentNotFound(path) => {
                EmailError::AttachmentNotFound(path.display().to_string())
            },
            SendGridError::Attachment(e) => EmailError::Attachment(e),
            SendGridError::Configuration(e) => EmailError::Configuration(e),
        }
    }
}

#[async_trait]
impl EmailPort for SendGridEmailAdapter {
    async fn send(&self, email: &OutboundEmail) -> Result<u16, EmailError> {
        let message = OutboundMessage {
            to: email.to.clone(),
            subject: email.subject.clone(),
            body: email.body.clone(),
            attachment: email.attachment.clone(),
        };
        self.client.send(&message).await.map_err(Self::map_error)
    }
}
