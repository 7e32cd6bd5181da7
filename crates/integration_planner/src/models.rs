//! Wire types for the planning backend's /query endpoint

use serde::{Deserialize, Serialize};

/// Request body for `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Free-text travel request
    pub question: String,
}

/// Response body from `POST /query`
///
/// The backend is expected to return an `answer` field on success; the
/// client substitutes a fixed fallback string when it is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Generated itinerary text
    #[serde(default)]
    pub answer: Option<String>,
}
