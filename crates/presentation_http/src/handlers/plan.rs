//! Plan handlers: generate, download, reset

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::ApiError, state::AppState};

/// Request body for plan generation
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Free-text travel request
    pub question: String,
}

/// Response body for a generated plan
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// The generated itinerary (Markdown)
    pub plan: String,
    /// Name of the saved document
    pub filename: String,
}

/// Generate a travel plan and install it in the session
pub async fn create_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let trip = state.trip_service.plan_trip(&request.question).await?;

    let filename = trip
        .document_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let plan = trip.plan.content().to_string();

    state.session.write().apply_plan(trip.plan, trip.document_path);
    info!(filename = %filename, "Plan installed in session");

    Ok(Json(PlanResponse { plan, filename }))
}

/// Download the saved itinerary document
pub async fn download_plan(State(state): State<AppState>) -> Result<Response, ApiError> {
    let path = state
        .session
        .read()
        .document_path()
        .cloned()
        .ok_or_else(|| ApiError::NotFound("No travel plan to download".to_string()))?;

    let bytes = state.trip_service.read_document(&path).await?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "travel_plan.md".to_string());

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/markdown; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}

/// "New plan": clear the whole session
pub async fn reset_plan(State(state): State<AppState>) -> StatusCode {
    state.session.write().reset();
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_request_deserialization() {
        let request: PlanRequest =
            serde_json::from_str(r#"{"question": "3 days in Rome"}"#).unwrap();
        assert_eq!(request.question, "3 days in Rome");
    }

    #[test]
    fn plan_response_serialization() {
        let response = PlanResponse {
            plan: "# Day 1".to_string(),
            filename: "travel_plan_20250101_120000_ab12.md".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("# Day 1"));
        assert!(json.contains("travel_plan_20250101_120000_ab12.md"));
    }
}
