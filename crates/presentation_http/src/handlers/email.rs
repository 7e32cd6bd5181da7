//! Email handlers: send the plan, reset the email form
//!
//! Outcome strings are rendered here, at the boundary, and recorded in the
//! session so the frontend can re-display them. Validation failures (bad
//! addresses, empty fields, missing attachment) are NOT send outcomes: they
//! happen before any provider call and return an error without touching the
//! session.

use application::{ApplicationError, SendOutcome};
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

/// Subject used when the request omits one
const DEFAULT_SUBJECT: &str = "Your AI Travel Plan";

/// Body used when the request omits one
const DEFAULT_BODY: &str =
    "Please find attached your AI-generated travel plan.\n\nSafe travels!";

/// Request body for sending the plan by email
#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    /// Comma-separated recipient addresses
    pub recipients: String,
    /// Subject line; defaults to a fixed subject
    #[serde(default)]
    pub subject: Option<String>,
    /// Plain-text body; defaults to a fixed courtesy message
    #[serde(default)]
    pub body: Option<String>,
}

/// Response body for an accepted send
#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub sent: bool,
    pub message: String,
    pub status: u16,
}

/// Send the session's saved itinerary as an email attachment
pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<EmailResponse>, ApiError> {
    let Some(email_service) = state.email_service.clone() else {
        return Err(ApiError::ServiceUnavailable(
            "Email is not configured".to_string(),
        ));
    };

    let attachment = state
        .session
        .read()
        .document_path()
        .cloned()
        .ok_or_else(|| ApiError::NotFound("No travel plan to send".to_string()))?;

    let subject = request
        .subject
        .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
    let body = request.body.unwrap_or_else(|| DEFAULT_BODY.to_string());

    match email_service
        .send_plan(&request.recipients, &subject, &body, Some(attachment))
        .await
    {
        Ok(receipt) => {
            let message = format!(
                "Email sent successfully to {} (status {})",
                receipt.recipients().joined(),
                receipt.status()
            );
            info!(status = receipt.status(), "Send accepted");
            state
                .session
                .write()
                .record_outcome(SendOutcome::accepted(message.clone()));
            Ok(Json(EmailResponse {
                sent: true,
                message,
                status: receipt.status(),
            }))
        },
        Err(err) => Err(record_send_failure(&state, err)),
    }
}

/// Record a provider-side failure in the session and map it to an API error
///
/// Only outcomes of an actual send attempt are recorded; everything else
/// (validation, missing attachment, configuration) passes through.
fn record_send_failure(state: &AppState, err: ApplicationError) -> ApiError {
    match err {
        ApplicationError::ProviderStatus { status } => {
            let message = format!("Email sending failed with status code {status}");
            warn!(status, "Send rejected by provider");
            state
                .session
                .write()
                .record_outcome(SendOutcome::failed(message.clone()));
            ApiError::ServiceUnavailable(message)
        },
        ApplicationError::ExternalService(reason) => {
            let message = format!("Failed to send email: {reason}");
            warn!(reason = %reason, "Send failed in transit");
            state
                .session
                .write()
                .record_outcome(SendOutcome::failed(message.clone()));
            ApiError::ServiceUnavailable(message)
        },
        other => other.into(),
    }
}

/// "Send another email": clear send state, keep the plan
pub async fn reset_email(State(state): State<AppState>) -> StatusCode {
    state.session.write().reset_email();
    StatusCode::NO_CONTENT
}
