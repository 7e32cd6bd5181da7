//! Infrastructure layer - adapters for external systems
//!
//! Implements the ports defined in the application layer: the planning
//! backend and SendGrid adapters, the on-disk document store, and the
//! application configuration loader.

pub mod adapters;
pub mod config;
pub mod document_store;

pub use adapters::{PlannerAdapter, SendGridEmailAdapter};
pub use config::{AppConfig, DocumentsConfig, ServerConfig};
pub use document_store::MarkdownDocumentStore;
