//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Frontend and health
        .route("/", get(handlers::home::index))
        .route("/health", get(handlers::health::health_check))
        // Plan API (v1)
        .route("/v1/plan", post(handlers::plan::create_plan))
        .route("/v1/plan/download", get(handlers::plan::download_plan))
        .route("/v1/plan/reset", post(handlers::plan::reset_plan))
        // Session API (v1)
        .route("/v1/session", get(handlers::session::get_session))
        // Email API (v1)
        .route("/v1/email", post(handlers::email::send_email))
        .route("/v1/email/reset", post(handlers::email::reset_email))
        // Attach state
        .with_state(state)
}
