//! Planning backend integration for Waypoint
//!
//! HTTP client for the remote travel-planning service. One blocking request
//! per plan, no retries, no idempotency key.

mod client;
mod models;

pub use client::{
    MISSING_ANSWER_FALLBACK, PlannerConfig, PlannerError, PlanningBackendClient, PlanningClient,
};
pub use models::{QueryRequest, QueryResponse};
