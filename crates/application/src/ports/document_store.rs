//! Document store port for the application layer
//!
//! Persists itinerary text as named files and reads the bytes back for
//! download and attachment. No retention policy: files accumulate and each
//! save produces a distinct name.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Document store errors
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Underlying filesystem failure; not recovered locally
    #[error("Document I/O error: {0}")]
    Io(String),

    /// The referenced document no longer exists
    #[error("Document not found: {0}")]
    NotFound(String),
}

/// Document store port trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Write plan text to a freshly named document, returning its path
    async fn save(&self, content: &str) -> Result<PathBuf, DocumentError>;

    /// Read a previously saved document back as raw bytes
    async fn read(&self, path: &Path) -> Result<Vec<u8>, DocumentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message() {
        let err = DocumentError::Io("permission denied".to_string());
        assert_eq!(err.to_string(), "Document I/O error: permission denied");
    }

    #[test]
    fn not_found_error_message() {
        let err = DocumentError::NotFound("plan.md".to_string());
        assert_eq!(err.to_string(), "Document not found: plan.md");
    }
}
