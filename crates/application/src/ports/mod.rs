//! Ports (interfaces) implemented by infrastructure adapters

mod document_store;
mod email_port;
mod planner_port;

pub use document_store::{DocumentError, DocumentStorePort};
pub use email_port::{EmailError, EmailPort, OutboundEmail};
pub use planner_port::{PlannerError, PlannerPort};

#[cfg(test)]
pub use document_store::MockDocumentStorePort;
#[cfg(test)]
pub use email_port::MockEmailPort;
#[cfg(test)]
pub use planner_port::MockPlannerPort;
