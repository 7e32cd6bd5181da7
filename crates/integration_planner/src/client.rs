//! Planning backend client
//!
//! HTTP client for the travel-planning service's `/query` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{QueryRequest, QueryResponse};

/// Fallback answer text when the backend omits the `answer` field
pub const MISSING_ANSWER_FALLBACK: &str = "No answer returned.";

/// Planning client errors
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Connection to the planning backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the planning backend failed in transit
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Backend answered with a non-200 status
    #[error("Planning backend returned status {status}")]
    Backend { status: u16 },

    /// Failed to parse the backend response
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Planning backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Backend base URL (default: <http://localhost:8000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 120; itinerary generation is slow)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout() -> u64 {
    120
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Planning client trait for requesting itineraries
#[async_trait]
pub trait PlanningClient: Send + Sync {
    /// Ask the backend to plan a trip from a free-text request
    async fn plan(&self, question: &str) -> Result<String, PlannerError>;
}

/// HTTP implementation against the planning backend
#[derive(Debug)]
pub struct PlanningBackendClient {
    client: Client,
    config: PlannerConfig,
}

impl PlanningBackendClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlannerError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, PlannerError> {
        Self::new(PlannerConfig::default())
    }

    fn query_url(&self) -> String {
        format!("{}/query", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PlanningClient for PlanningBackendClient {
    #[instrument(skip(self, question), fields(question_len = question.len()))]
    async fn plan(&self, question: &str) -> Result<String, PlannerError> {
        let url = self.query_url();
        debug!(url = %url, "Requesting travel plan");

        let response = self
            .client
            .post(&url)
            .json(&QueryRequest {
                question: question.to_string(),
            })
            .send()
            .await
            .map_err(|e| PlannerError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(PlannerError::Backend {
                status: status.as_u16(),
            });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| PlannerError::ParseError(e.to_string()))?;

        Ok(body
            .answer
            .unwrap_or_else(|| MISSING_ANSWER_FALLBACK.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: PlannerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn query_url_appends_fixed_path() {
        let client = PlanningBackendClient::with_defaults().expect("client creation");
        assert_eq!(client.query_url(), "http://localhost:8000/query");
    }

    #[test]
    fn query_url_tolerates_trailing_slash() {
        let config = PlannerConfig {
            base_url: "http://backend:9000/".to_string(),
            ..Default::default()
        };
        let client = PlanningBackendClient::new(config).expect("client creation");
        assert_eq!(client.query_url(), "http://backend:9000/query");
    }

    #[test]
    fn backend_error_carries_status() {
        let err = PlannerError::Backend { status: 503 };
        assert_eq!(err.to_string(), "Planning backend returned status 503");
    }

    #[test]
    fn client_creation() {
        assert!(PlanningBackendClient::with_defaults().is_ok());
    }
}
