//! Application services

mod email_service;
mod trip_service;

pub use email_service::EmailService;
pub use trip_service::{PlannedTrip, TripService};
