//! Planner adapter - implements PlannerPort using integration_planner

use application::error::ApplicationError;
use application::ports::{PlannerError, PlannerPort};
use async_trait::async_trait;
use integration_planner::{
    PlannerConfig, PlannerError as ClientError, PlanningBackendClient, PlanningClient,
};

/// Adapter for the travel-planning backend
#[derive(Debug)]
pub struct PlannerAdapter {
    client: PlanningBackendClient,
}

impl PlannerAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: PlannerConfig) -> Result<Self, ApplicationError> {
        let client = PlanningBackendClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map an integration client error to a port error
    fn map_error(err: ClientError) -> PlannerError {
        match err {
            ClientError::Backend { status } => PlannerError::Backend { status },
            ClientError::ConnectionFailed(e)
            | ClientError::RequestFailed(e)
            | ClientError::ParseError(e) => PlannerError::Transport(e),
        }
    }
}

#[async_trait]
impl PlannerPort for PlannerAdapter {
    async fn plan(&self, question: &str) -> Result<String, PlannerError> {
        self.client.plan(question).await.map_err(Self::map_error)
    }
}
