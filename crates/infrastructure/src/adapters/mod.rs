//! Adapters implementing application ports over the integration clients

mod planner_adapter;
mod sendgrid_email_adapter;

pub use planner_adapter::PlannerAdapter;
pub use sendgrid_email_adapter::SendGridEmailAdapter;
