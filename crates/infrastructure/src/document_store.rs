//! On-disk document store
//!
//! Writes each itinerary to a freshly named Markdown file under a single
//! directory. Files accumulate; nothing is ever overwritten or cleaned up.

use std::path::{Path, PathBuf};

use application::ports::{DocumentError, DocumentStorePort};
use async_trait::async_trait;
use chrono::Local;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Document store writing Markdown files under a configured directory
#[derive(Debug, Clone)]
pub struct MarkdownDocumentStore {
    directory: PathBuf,
}

impl MarkdownDocumentStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created lazily on the first save.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// A fresh document name: timestamp plus a short random suffix, so two
    /// saves within the same second still get distinct files
    fn next_filename() -> String {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(4).collect();
        format!("travel_plan_{stamp}_{suffix}.md")
    }
}

#[async_trait]
impl DocumentStorePort for MarkdownDocumentStore {
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    async fn save(&self, content: &str) -> Result<PathBuf, DocumentError> {
        std::fs::create_dir_all(&self.directory).map_err(|e| DocumentError::Io(e.to_string()))?;

        let path = self.directory.join(Self::next_filename());
        std::fs::write(&path, content).map_err(|e| DocumentError::Io(e.to_string()))?;

        debug!(path = %path.display(), "Saved travel plan document");
        Ok(path)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>, DocumentError> {
        if !path.exists() {
            return Err(DocumentError::NotFound(path.display().to_string()));
        }
        std::fs::read(path).map_err(|e| DocumentError::Io(e.to_string()))
    }
}
