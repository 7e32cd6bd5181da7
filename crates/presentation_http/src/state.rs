//! Application state shared across handlers

use std::sync::Arc;

use application::{EmailService, PlannerSession, TripService};
use infrastructure::AppConfig;
use parking_lot::RwLock;

/// Shared application state
///
/// The session is process-wide: this is a single-user deployment with one
/// interaction in flight at a time. Handlers must not hold the session lock
/// across an await point.
#[derive(Clone)]
pub struct AppState {
    /// Trip planning service
    pub trip_service: Arc<TripService>,
    /// Email service; `None` when SendGrid is not configured
    pub email_service: Option<Arc<EmailService>>,
    /// Current planning session
    pub session: Arc<RwLock<PlannerSession>>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
