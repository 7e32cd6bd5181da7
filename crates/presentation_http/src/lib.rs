//! Waypoint HTTP presentation layer
//!
//! This crate provides the HTTP API and the single-page frontend for
//! Waypoint: request a plan, view and download it, email it.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
