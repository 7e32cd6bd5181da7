//! Attachment loading and encoding
//!
//! Attachments are whole-file and in-memory: the file is read completely,
//! base64-encoded, and typed by extension. The existence check runs before
//! any network traffic so a bad path never reaches the provider.

use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::{error::SendGridError, models::AttachmentPayload};

/// Determine a MIME type from the file extension
///
/// `.md` maps to `text/markdown`, `.pdf` to `application/pdf`, and
/// everything else falls back to `text/plain`.
pub fn mime_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("md") => "text/markdown",
        Some("pdf") => "application/pdf",
        _ => "text/plain",
    }
}

/// Read and encode a file as a SendGrid attachment payload
///
/// # Errors
///
/// Returns [`SendGridError::AttachmentNotFound`] when the path does not
/// exist, and [`SendGridError::Attachment`] when it cannot be read.
pub fn load_attachment(path: &Path) -> Result<AttachmentPayload, SendGridError> {
    if !path.exists() {
        return Err(SendGridError::AttachmentNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|e| SendGridError::Attachment(e.to_string()))?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment")
        .to_string();

    Ok(AttachmentPayload {
        content: BASE64.encode(bytes),
        filename,
        mime_type: mime_type_for(path).to_string(),
        disposition: "attachment".to_string(),
    })
}
