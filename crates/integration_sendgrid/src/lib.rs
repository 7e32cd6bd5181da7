//! SendGrid transactional email integration for Waypoint
//!
//! HTTP client for the SendGrid v3 mail-send API: plain-text body, optional
//! whole-file base64 attachment, single call per send. The provider answering
//! 200/201/202 means "accepted", not "delivered".

mod attachment;
mod client;
mod config;
mod error;
mod models;

pub use attachment::{load_attachment, mime_type_for};
pub use client::{MailSender, SendGridClient};
pub use config::SendGridConfig;
pub use error::SendGridError;
pub use models::{AttachmentPayload, MailSendRequest, OutboundMessage};
