//! Application layer for Waypoint
//!
//! Orchestrates the domain through ports (traits implemented by
//! infrastructure adapters): plan a trip, persist the itinerary, and send it
//! by email. Also owns the explicit per-session state object.

pub mod error;
pub mod ports;
pub mod services;
pub mod session;

pub use error::ApplicationError;
pub use services::{EmailService, PlannedTrip, TripService};
pub use session::{PlannerSession, SendOutcome};
