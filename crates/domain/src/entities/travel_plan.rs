//! Travel plan entity
//!
//! The text itinerary returned by the planning backend. A plan is created
//! whole from a successful planning response and replaced (never patched)
//! when the user starts over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A generated travel itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPlan {
    content: String,
    created_at: DateTime<Utc>,
}

impl TravelPlan {
    /// Create a plan from backend answer text
    ///
    /// # Errors
    ///
    /// Returns an error if the content is empty or whitespace-only.
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyField("Travel plan content"));
        }

        Ok(Self {
            content,
            created_at: Utc::now(),
        })
    }

    /// The itinerary text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// When this plan was received
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
