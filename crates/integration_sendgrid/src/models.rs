//! Wire types for the SendGrid v3 mail-send API

use std::path::PathBuf;

use domain::RecipientList;
use serde::{Deserialize, Serialize};

/// An outbound email as composed by the caller
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    /// Validated recipients
    pub to: RecipientList,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
    /// Optional attachment path; the whole file is read into memory
    pub attachment: Option<PathBuf>,
}

/// `POST /v3/mail/send` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailSendRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailParty,
    pub subject: String,
    pub content: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<AttachmentPayload>,
}

/// One recipient group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personalization {
    pub to: Vec<EmailParty>,
}

/// A named mail party (only the address is used)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailParty {
    pub email: String,
}

/// One body part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

/// A base64-encoded attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentPayload {
    /// Base64-encoded file bytes
    pub content: String,
    /// File name shown to the recipient
    pub filename: String,
    /// MIME type derived from the file extension
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Always "attachment" (never inline)
    pub disposition: String,
}
