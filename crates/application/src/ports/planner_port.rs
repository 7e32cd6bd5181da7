//! Planner port for the application layer
//!
//! Interface to the remote travel-planning backend. Implemented by an
//! adapter in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Planner port errors
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Backend answered with a non-200 status
    #[error("Planning backend returned status {status}")]
    Backend { status: u16 },

    /// Backend unreachable or the request failed in transit
    #[error("Planning request failed: {0}")]
    Transport(String),
}

/// Planner port trait
///
/// One synchronous request per plan; no retries, no idempotency key.
/// Repeated calls may return different itineraries but are safe to retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlannerPort: Send + Sync {
    /// Turn a free-text travel request into itinerary text
    async fn plan(&self, question: &str) -> Result<String, PlannerError>;
}
