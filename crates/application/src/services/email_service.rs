//! Email service
//!
//! Validates recipients and message fields, then dispatches one email with
//! the saved itinerary attached. All validation failures surface before any
//! network call; a successful send yields a typed [`DeliveryReceipt`].

use std::{fmt, path::PathBuf, sync::Arc};

use domain::{DeliveryReceipt, DomainError, RecipientList};
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    ports::{EmailError, EmailPort, OutboundEmail},
};

/// Service for sending a travel plan by email
pub struct EmailService {
    email: Arc<dyn EmailPort>,
}

impl fmt::Debug for EmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailService").finish_non_exhaustive()
    }
}

impl EmailService {
    /// Create a new email service
    pub fn new(email: Arc<dyn EmailPort>) -> Self {
        Self { email }
    }

    /// Send the plan to a comma-separated recipient string
    ///
    /// # Errors
    ///
    /// Fails before any network call when the recipient string contains
    /// invalid addresses (all offenders reported), when no recipients
    /// remain after parsing, or when subject/body are empty. Provider
    /// rejections and transport failures are mapped to application errors
    /// carrying the status code or cause.
    #[instrument(skip(self, raw_recipients, body), fields(subject = %subject))]
    pub async fn send_plan(
        &self,
        raw_recipients: &str,
        subject: &str,
        body: &str,
        attachment: Option<PathBuf>,
    ) -> Result<DeliveryReceipt, ApplicationError> {
        let recipients = RecipientList::parse(raw_recipients)?;

        if recipients.is_empty() {
            return Err(DomainError::EmptyField("Recipient list").into());
        }
        if subject.trim().is_empty() {
            return Err(DomainError::EmptyField("Subject").into());
        }
        if body.trim().is_empty() {
            return Err(DomainError::EmptyField("Body").into());
        }

        let email = OutboundEmail {
            to: recipients.clone(),
            subject: subject.to_string(),
            body: body.to_string(),
            attachment,
        };

        let status = self.email.send(&email).await.map_err(map_email_error)?;

        info!(status, recipients = %recipients.joined(), "Email accepted by provider");

        Ok(DeliveryReceipt::new(status, recipients))
    }
}

fn map_email_error(err: EmailError) -> ApplicationError {
    match err {
        EmailError::Rejected { status } => ApplicationError::ProviderStatus { status },
        EmailError::Transport(msg) => ApplicationError::ExternalService(msg),
        EmailError::EmptyField(field) => DomainError::EmptyField(field).into(),
        EmailError::AttachmentNotFound(path) => ApplicationError::NotFound(path),
        EmailError::Attachment(msg) => ApplicationError::Internal(msg),
        EmailError::Configuration(msg) => ApplicationError::Configuration(msg),
    }
}
