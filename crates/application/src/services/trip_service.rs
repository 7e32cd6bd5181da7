//! Trip planning service
//!
//! Sequences one planning interaction: forward the free-text request to the
//! planning backend and persist the returned itinerary as a document. On any
//! backend failure nothing is written to disk.

use std::{fmt, path::PathBuf, sync::Arc};

use domain::{DomainError, TravelPlan};
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    ports::{DocumentError, DocumentStorePort, PlannerError, PlannerPort},
};

/// Result of one successful planning interaction
#[derive(Debug, Clone)]
pub struct PlannedTrip {
    /// The generated itinerary
    pub plan: TravelPlan,
    /// Where the itinerary was saved
    pub document_path: PathBuf,
}

/// Service orchestrating plan generation and persistence
pub struct TripService {
    planner: Arc<dyn PlannerPort>,
    documents: Arc<dyn DocumentStorePort>,
}

impl fmt::Debug for TripService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripService").finish_non_exhaustive()
    }
}

impl TripService {
    /// Create a new trip service
    pub fn new(planner: Arc<dyn PlannerPort>, documents: Arc<dyn DocumentStorePort>) -> Self {
        Self { planner, documents }
    }

    /// Plan a trip from a free-text request and save the itinerary
    ///
    /// # Errors
    ///
    /// Fails on an empty request, a backend failure (carrying the status
    /// code or transport cause), or a document write failure.
    #[instrument(skip(self, question), fields(question_len = question.len()))]
    pub async fn plan_trip(&self, question: &str) -> Result<PlannedTrip, ApplicationError> {
        if question.trim().is_empty() {
            return Err(DomainError::EmptyField("Travel request").into());
        }

        let answer = self.planner.plan(question).await.map_err(map_planner_error)?;
        let plan = TravelPlan::new(answer)?;

        let document_path = self
            .documents
            .save(plan.content())
            .await
            .map_err(map_document_error)?;

        info!(path = %document_path.display(), "Travel plan generated and saved");

        Ok(PlannedTrip {
            plan,
            document_path,
        })
    }

    /// Read a saved itinerary back as raw bytes (for download or attachment)
    pub async fn read_document(&self, path: &std::path::Path) -> Result<Vec<u8>, ApplicationError> {
        self.documents.read(path).await.map_err(map_document_error)
    }
}

fn map_planner_error(err: PlannerError) -> ApplicationError {
    match err {
        PlannerError::Backend { status } => ApplicationError::BackendStatus { status },
        PlannerError::Transport(msg) => ApplicationError::ExternalService(msg),
    }
}

fn map_document_error(err: DocumentError) -> ApplicationError {
    match err {
        DocumentError::Io(msg) => ApplicationError::Internal(msg),
        DocumentError::NotFound(name) => ApplicationError::NotFound(name),
    }
}
