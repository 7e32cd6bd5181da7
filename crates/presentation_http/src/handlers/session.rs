//! Session view handler

use application::{PlannerSession, SendOutcome};
use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Read-only snapshot of the planning session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub has_plan: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub show_email_form: bool,
    pub email_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_outcome: Option<SendOutcome>,
}

impl SessionView {
    /// Snapshot the given session
    pub fn from_session(session: &PlannerSession) -> Self {
        Self {
            has_plan: session.has_plan(),
            plan: session.plan().map(|p| p.content().to_string()),
            filename: session
                .document_path()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned()),
            show_email_form: session.show_email_form(),
            email_sent: session.email_sent(),
            last_outcome: session.last_outcome().cloned(),
        }
    }
}

/// Current session state, for the frontend to render
pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let view = SessionView::from_session(&state.session.read());
    Json(view)
}
