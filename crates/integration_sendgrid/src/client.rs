//! SendGrid mail-send client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use domain::EmailAddress;

use crate::{
    attachment::load_attachment,
    config::SendGridConfig,
    error::SendGridError,
    models::{Content, EmailParty, MailSendRequest, OutboundMessage, Personalization},
};

/// Statuses the provider uses to acknowledge an accepted send
const ACCEPTED_STATUSES: [u16; 3] = [200, 201, 202];

/// Mail sender trait
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Send one email, returning the provider's accepted status code
    async fn send(&self, message: &OutboundMessage) -> Result<u16, SendGridError>;
}

/// HTTP client for the SendGrid v3 API
#[derive(Debug)]
pub struct SendGridClient {
    client: Client,
    config: SendGridConfig,
}

impl SendGridClient {
    /// Create a new client, validating the configuration
    ///
    /// # Errors
    ///
    /// Returns [`SendGridError::Configuration`] when the API key is empty or
    /// the from-address is missing or malformed; these are fatal at startup
    /// of the email capability, not per-send failures.
    pub fn new(config: SendGridConfig) -> Result<Self, SendGridError> {
        if config.api_key.expose_secret().trim().is_empty() {
            return Err(SendGridError::Configuration(
                "SendGrid API key is required".to_string(),
            ));
        }
        EmailAddress::new(&config.from_email).map_err(|e| {
            SendGridError::Configuration(format!("Invalid from address: {e}"))
        })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SendGridError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn send_url(&self) -> String {
        format!(
            "{}/v3/mail/send",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Validate message preconditions and build the request payload
    ///
    /// Runs entirely before any network call: empty fields and a missing
    /// attachment file fail here without contacting the provider.
    fn build_request(&self, message: &OutboundMessage) -> Result<MailSendRequest, SendGridError> {
        if message.to.is_empty() {
            return Err(SendGridError::EmptyField("Recipient list"));
        }
        if message.subject.trim().is_empty() {
            return Err(SendGridError::EmptyField("Subject"));
        }
        if message.body.trim().is_empty() {
            return Err(SendGridError::EmptyField("Body"));
        }

        let attachments = match &message.attachment {
            Some(path) => vec![load_attachment(path)?],
            None => Vec::new(),
        };

        Ok(MailSendRequest {
            personalizations: vec![Personalization {
                to: message
                    .to
                    .iter()
                    .map(|address| EmailParty {
                        email: address.as_str().to_string(),
                    })
                    .collect(),
            }],
            from: EmailParty {
                email: self.config.from_email.clone(),
            },
            subject: message.subject.clone(),
            content: vec![Content {
                content_type: "text/plain".to_string(),
                value: message.body.clone(),
            }],
            attachments,
        })
    }
}

#[async_trait]
impl MailSender for SendGridClient {
    #[instrument(skip(self, message), fields(recipients = message.to.len()))]
    async fn send(&self, message: &OutboundMessage) -> Result<u16, SendGridError> {
        let request = self.build_request(message)?;

        let url = self.send_url();
        debug!(url = %url, attachments = request.attachments.len(), "Sending email");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| SendGridError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        if ACCEPTED_STATUSES.contains(&status) {
            Ok(status)
        } else {
            Err(SendGridError::Rejected { status })
        }
    }
}
